#![forbid(unsafe_code)]

//! Icon gallery for iconhue.
//!
//! Fetches a repository listing, mounts an original and a recolored copy of
//! every SVG icon on a surface, and retints all copies when the target color
//! changes. The network and the mount target are traits so the same flow
//! drives the browser page and the in-memory tests.

mod config;
mod error;
mod fetch;
mod gallery;
mod listing;
mod surface;

pub use config::GalleryConfig;
pub use error::GalleryError;
pub use fetch::{FetchError, Fetcher};
pub use gallery::{Gallery, LoadReport, SkippedIcon};
pub use listing::{IconSource, RepoEntry, fetch_listing, parse_listing, select_icons};
pub use surface::{IconPair, IconSurface, MemorySurface, copy_id, original_id};
