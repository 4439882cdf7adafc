//! Mount targets for fetched icons.

use ih_svg::{DocumentNode, Element, SvgDocument};

use crate::error::GalleryError;
use crate::listing::IconSource;

/// Id of the frame holding the untouched icon.
#[must_use]
pub fn original_id(name: &str) -> String {
    format!("{name}_original")
}

/// Id of the frame holding the recolored icon.
#[must_use]
pub fn copy_id(name: &str) -> String {
    format!("{name}_copy")
}

/// The two mounted frames of one icon. Each frame is an `<svg>` element
/// sized by the gallery with the icon document as its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPair<N> {
    pub name: String,
    pub original: N,
    pub copy: N,
}

/// Something that can turn fetched markup into a pair of mounted frames.
pub trait IconSurface {
    type Node: DocumentNode;

    /// Create both frames for `source` from `markup` and attach them.
    ///
    /// Called only once the markup has been fetched in full.
    fn mount(
        &mut self,
        source: &IconSource,
        markup: &str,
        size: u32,
    ) -> Result<IconPair<Self::Node>, GalleryError>;
}

/// In-memory surface backed by parsed [`SvgDocument`] trees.
#[derive(Debug, Default)]
pub struct MemorySurface {
    mounted: Vec<String>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the icons mounted so far, in mount order.
    #[must_use]
    pub fn mounted(&self) -> &[String] {
        &self.mounted
    }
}

impl IconSurface for MemorySurface {
    type Node = Element;

    fn mount(
        &mut self,
        source: &IconSource,
        markup: &str,
        size: u32,
    ) -> Result<IconPair<Element>, GalleryError> {
        let document = SvgDocument::parse(markup).map_err(|err| GalleryError::Markup {
            name: source.name.clone(),
            message: err.to_string(),
        })?;
        let content = document.into_root();

        let pair = IconPair {
            name: source.name.clone(),
            original: frame(&original_id(&source.name), size, content.clone()),
            copy: frame(&copy_id(&source.name), size, content),
        };
        self.mounted.push(source.name.clone());
        Ok(pair)
    }
}

fn frame(id: &str, size: u32, content: Element) -> Element {
    let size = size.to_string();
    Element::svg()
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .id(id)
        .attr("width", &size)
        .attr("height", &size)
        .child(content)
}
