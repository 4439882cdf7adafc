#![forbid(unsafe_code)]

//! SVG document model and the hue-preserving tree colorizer for iconhue.
//!
//! Provides an owned element tree parsed from icon markup, the
//! [`DocumentNode`] abstraction the colorizer walks, and the identifier pass
//! that lets several inlined copies of one icon coexist in a page.

mod attributes;
mod colorize;
mod document;
mod element;
mod node;
mod paint;
mod style;
mod unique_ids;

pub use attributes::{Attribute, Attributes};
pub use colorize::{ColorizeError, ColorizeReport, colorize, colorize_with};
pub use document::{SvgDocument, SvgError};
pub use element::{Content, Element, ElementKind};
pub use node::DocumentNode;
pub use paint::{PaintChannel, ResolvedPaint, resolve_paint};
pub use style::StyleDeclarations;
pub use unique_ids::{IdRewriteMap, make_ids_unique};
