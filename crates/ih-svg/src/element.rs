//! SVG element tree.
//!
//! Elements are either parsed from icon markup or built with the fluent
//! constructors below. Unknown tags are kept verbatim.

use std::fmt::Write;

use crate::attributes::{Attributes, escape_xml_text};
use crate::style::StyleDeclarations;

/// SVG element kinds the recolorer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Svg,
    Group,
    Defs,
    Use,
    Symbol,
    Anchor,
    Switch,
    Image,
    ForeignObject,
    Rect,
    Circle,
    Ellipse,
    Line,
    Polyline,
    Polygon,
    Path,
    Text,
    Tspan,
    TextPath,
    ClipPath,
    Mask,
    Marker,
    Pattern,
    LinearGradient,
    RadialGradient,
    Stop,
    Filter,
    Style,
    Title,
    Desc,
    Metadata,
}

impl ElementKind {
    /// Classify a local tag name. Returns `None` for tags outside this set.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "svg" => Self::Svg,
            "g" => Self::Group,
            "defs" => Self::Defs,
            "use" => Self::Use,
            "symbol" => Self::Symbol,
            "a" => Self::Anchor,
            "switch" => Self::Switch,
            "image" => Self::Image,
            "foreignObject" => Self::ForeignObject,
            "rect" => Self::Rect,
            "circle" => Self::Circle,
            "ellipse" => Self::Ellipse,
            "line" => Self::Line,
            "polyline" => Self::Polyline,
            "polygon" => Self::Polygon,
            "path" => Self::Path,
            "text" => Self::Text,
            "tspan" => Self::Tspan,
            "textPath" => Self::TextPath,
            "clipPath" => Self::ClipPath,
            "mask" => Self::Mask,
            "marker" => Self::Marker,
            "pattern" => Self::Pattern,
            "linearGradient" => Self::LinearGradient,
            "radialGradient" => Self::RadialGradient,
            "stop" => Self::Stop,
            "filter" => Self::Filter,
            "style" => Self::Style,
            "title" => Self::Title,
            "desc" => Self::Desc,
            "metadata" => Self::Metadata,
            _ => return None,
        };
        Some(kind)
    }

    /// Get the SVG tag name for this element kind.
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Group => "g",
            Self::Defs => "defs",
            Self::Use => "use",
            Self::Symbol => "symbol",
            Self::Anchor => "a",
            Self::Switch => "switch",
            Self::Image => "image",
            Self::ForeignObject => "foreignObject",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Line => "line",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
            Self::Path => "path",
            Self::Text => "text",
            Self::Tspan => "tspan",
            Self::TextPath => "textPath",
            Self::ClipPath => "clipPath",
            Self::Mask => "mask",
            Self::Marker => "marker",
            Self::Pattern => "pattern",
            Self::LinearGradient => "linearGradient",
            Self::RadialGradient => "radialGradient",
            Self::Stop => "stop",
            Self::Filter => "filter",
            Self::Style => "style",
            Self::Title => "title",
            Self::Desc => "desc",
            Self::Metadata => "metadata",
        }
    }

    /// Whether the DOM models this element as an `SVGGraphicsElement`.
    #[must_use]
    pub const fn is_graphical(self) -> bool {
        matches!(
            self,
            Self::Svg
                | Self::Group
                | Self::Defs
                | Self::Use
                | Self::Anchor
                | Self::Switch
                | Self::Image
                | Self::ForeignObject
                | Self::Rect
                | Self::Circle
                | Self::Ellipse
                | Self::Line
                | Self::Polyline
                | Self::Polygon
                | Self::Path
                | Self::Text
                | Self::Tspan
                | Self::TextPath
        )
    }
}

/// A child of an element, kept in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Element(Element),
    Text(String),
}

impl Content {
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(elem) => Some(elem),
            Self::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(elem) => Some(elem),
            Self::Text(_) => None,
        }
    }
}

/// An SVG element with attributes and optional children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Attributes,
    children: Vec<Content>,
}

impl Element {
    /// Create a new element of the given kind.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self::with_tag(kind.tag_name())
    }

    /// Create an element with an arbitrary tag name.
    #[must_use]
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create an svg root element.
    #[must_use]
    pub fn svg() -> Self {
        Self::new(ElementKind::Svg)
    }

    /// Create a group element.
    #[must_use]
    pub fn group() -> Self {
        Self::new(ElementKind::Group)
    }

    /// Create a defs element.
    #[must_use]
    pub fn defs() -> Self {
        Self::new(ElementKind::Defs)
    }

    /// Create a rect element.
    #[must_use]
    pub fn rect() -> Self {
        Self::new(ElementKind::Rect)
    }

    /// Create a circle element.
    #[must_use]
    pub fn circle() -> Self {
        Self::new(ElementKind::Circle)
    }

    /// Create a path element.
    #[must_use]
    pub fn path() -> Self {
        Self::new(ElementKind::Path)
    }

    /// Create a use element.
    #[must_use]
    pub fn use_elem() -> Self {
        Self::new(ElementKind::Use)
    }

    /// Create a linearGradient element.
    #[must_use]
    pub fn linear_gradient() -> Self {
        Self::new(ElementKind::LinearGradient)
    }

    /// Create a gradient stop element.
    #[must_use]
    pub fn stop() -> Self {
        Self::new(ElementKind::Stop)
    }

    /// Set the d (path data) attribute.
    #[must_use]
    pub fn d(self, path: &str) -> Self {
        self.attr("d", path)
    }

    /// Set the fill attribute.
    #[must_use]
    pub fn fill(self, color: &str) -> Self {
        self.attr("fill", color)
    }

    /// Set the stroke attribute.
    #[must_use]
    pub fn stroke(self, color: &str) -> Self {
        self.attr("stroke", color)
    }

    /// Set the stop-color attribute.
    #[must_use]
    pub fn stop_color(self, color: &str) -> Self {
        self.attr("stop-color", color)
    }

    /// Set the inline style attribute.
    #[must_use]
    pub fn style(self, css: &str) -> Self {
        self.attr("style", css)
    }

    /// Set the id attribute.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Set a custom attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Append a text run.
    #[must_use]
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.children.push(Content::Text(text.into()));
        self
    }

    /// Add a child element.
    #[must_use]
    pub fn child(mut self, elem: Element) -> Self {
        self.children.push(Content::Element(elem));
        self
    }

    /// Local tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Known kind of this element, if any.
    #[must_use]
    pub fn kind(&self) -> Option<ElementKind> {
        ElementKind::from_tag(&self.tag)
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    /// Read one attribute.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Write one attribute in place.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.set(name, value);
    }

    /// Read a property from the inline style attribute.
    #[must_use]
    pub fn style_property(&self, property: &str) -> Option<String> {
        let style = self.attrs.get("style")?;
        StyleDeclarations::parse(style)
            .get(property)
            .map(str::to_string)
    }

    /// Write a property into the inline style attribute.
    pub fn set_style_property(&mut self, property: &str, value: &str) {
        let mut style = StyleDeclarations::parse(self.attrs.get("style").unwrap_or_default());
        style.set(property, value);
        self.attrs.set("style", style.to_string());
    }

    /// Append a child in place.
    pub fn push_child(&mut self, elem: Element) {
        self.children.push(Content::Element(elem));
    }

    /// Append a text run in place.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Content::Text(text.into()));
    }

    /// Element and text children in document order.
    #[must_use]
    pub fn children(&self) -> &[Content] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Content::as_element)
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Content::as_element_mut)
    }

    /// Pre-order iterator over this element and all descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &Element> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev().filter_map(Content::as_element));
            Some(next)
        })
    }

    /// Direct text runs joined together, or `None` when there are none.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let mut runs = self.children.iter().filter_map(|child| match child {
            Content::Text(text) => Some(text.as_str()),
            Content::Element(_) => None,
        });
        let first = runs.next()?;
        Some(runs.fold(first.to_string(), |mut text, run| {
            text.push_str(run);
            text
        }))
    }

    /// Render the element to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(256);
        self.write_to_string(&mut output);
        output
    }

    /// Write the element to a string.
    pub fn write_to_string(&self, output: &mut String) {
        let tag = &self.tag;
        let _ = write!(output, "<{tag}");
        output.push_str(&self.attrs.render());

        if self.children.is_empty() {
            output.push_str("/>");
            return;
        }

        output.push('>');
        for child in &self.children {
            match child {
                Content::Element(elem) => elem.write_to_string(output),
                Content::Text(text) => output.push_str(&escape_xml_text(text)),
            }
        }
        let _ = write!(output, "</{tag}>");
    }
}
