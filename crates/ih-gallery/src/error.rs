use ih_core::ParseColorError;
use ih_svg::ColorizeError;
use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("malformed listing: {0}")]
    Listing(#[from] serde_json::Error),
    #[error("invalid markup for {name}: {message}")]
    Markup { name: String, message: String },
    #[error(transparent)]
    Colorize(#[from] ColorizeError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ParseColorError),
    #[error("cannot mount {name}: {message}")]
    Surface { name: String, message: String },
}
