//! SVG document parsing and rendering.
//!
//! Provides the `SvgDocument` struct, an owned element tree built from icon
//! markup that renders back to markup after recoloring.

use std::fmt;
use std::io;

use roxmltree::{Node, ParsingOptions};
use thiserror::Error;

use crate::element::Element;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Errors produced while reading icon markup.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("invalid SVG markup: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("root element is <{0}>, expected <svg>")]
    NotSvg(String),
}

/// A parsed SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    root: Element,
}

impl SvgDocument {
    /// Parse SVG markup. The root element must be `<svg>`.
    pub fn parse(markup: &str) -> Result<Self, SvgError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(markup, options)?;
        let node = doc.root_element();
        if node.tag_name().name() != "svg" {
            return Err(SvgError::NotSvg(node.tag_name().name().to_string()));
        }

        let mut root = Element::with_tag("svg");
        copy_into(node, &mut root);

        Ok(Self { root })
    }

    /// Wrap an already built tree.
    #[must_use]
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    #[must_use]
    pub fn into_root(self) -> Element {
        self.root
    }

    /// Write the SVG document to an io::Write implementor.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let svg = self.to_string();
        writer.write_all(svg.as_bytes())
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root.render())
    }
}

/// Namespaces declared on `node` itself rather than inherited from its parent.
fn declared_namespaces<'a>(node: Node<'a, '_>) -> impl Iterator<Item = (String, &'a str)> {
    let inherited: Vec<_> = node
        .parent_element()
        .map(|parent| {
            parent
                .namespaces()
                .map(|ns| (ns.name(), ns.uri()))
                .collect()
        })
        .unwrap_or_default();
    node.namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .filter(move |ns| !inherited.contains(&(ns.name(), ns.uri())))
        .map(|ns| {
            let name = match ns.name() {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => String::from("xmlns"),
            };
            (name, ns.uri())
        })
}

fn copy_into(node: Node<'_, '_>, target: &mut Element) {
    for (name, uri) in declared_namespaces(node) {
        target.set_attr(&name, uri);
    }
    for attr in node.attributes() {
        let name = match attr.namespace().and_then(|uri| node.lookup_prefix(uri)) {
            Some(prefix) => format!("{prefix}:{}", attr.name()),
            None => attr.name().to_string(),
        };
        target.set_attr(&name, attr.value());
    }

    for child in node.children() {
        if child.is_element() {
            let mut element = Element::with_tag(qualified_tag(child));
            copy_into(child, &mut element);
            target.push_child(element);
        } else if let Some(text) = child.text().filter(|_| child.is_text()) {
            target.push_text(text);
        }
    }
}

fn qualified_tag(node: Node<'_, '_>) -> String {
    let name = node.tag_name();
    match name.namespace() {
        Some(uri) if uri != SVG_NS => match node.lookup_prefix(uri) {
            Some(prefix) => format!("{prefix}:{}", name.name()),
            None => name.name().to_string(),
        },
        _ => name.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 24 24">
  <defs>
    <linearGradient id="g"><stop offset="0" stop-color="#ff0000"/></linearGradient>
  </defs>
  <path d="M0 0h24v24H0z" fill="url(#g)"/>
  <use xlink:href="#g" style="fill:#00f"/>
</svg>"##;

    #[test]
    fn parses_tree_and_namespaces() {
        let doc = SvgDocument::parse(ICON).unwrap();
        let root = doc.root();
        assert_eq!(root.tag(), "svg");
        assert_eq!(root.get_attr("xmlns"), Some(SVG_NS));
        assert_eq!(
            root.get_attr("xmlns:xlink"),
            Some("http://www.w3.org/1999/xlink")
        );
        assert_eq!(root.get_attr("viewBox"), Some("0 0 24 24"));

        let tags: Vec<_> = root.descendants().map(Element::tag).collect();
        assert_eq!(tags, ["svg", "defs", "linearGradient", "stop", "path", "use"]);

        let use_elem = root.descendants().find(|e| e.tag() == "use").unwrap();
        assert_eq!(use_elem.get_attr("xlink:href"), Some("#g"));
    }

    #[test]
    fn renders_back_to_markup() {
        let doc = SvgDocument::parse(ICON).unwrap();
        let rendered = doc.to_string();
        assert!(rendered.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(rendered.contains("<stop offset=\"0\" stop-color=\"#ff0000\"/>"));
        assert!(rendered.contains("xlink:href=\"#g\""));
        assert!(rendered.ends_with("</svg>"));

        let reparsed = SvgDocument::parse(&rendered).unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn keeps_text_content() {
        let doc = SvgDocument::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><title>A &amp; B</title></svg>"#,
        )
        .unwrap();
        let title = doc.root().child_elements().next().unwrap();
        assert_eq!(title.text().as_deref(), Some("A & B"));
        assert!(doc.to_string().contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn mixed_content_keeps_its_order() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg"><text>head <tspan>x</tspan> tail</text></svg>"#;
        let doc = SvgDocument::parse(markup).unwrap();
        assert_eq!(doc.to_string(), markup);
    }

    #[test]
    fn nested_namespace_declarations_survive() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg"><foreignObject><div xmlns="http://www.w3.org/1999/xhtml"><p>hi</p></div></foreignObject><g xmlns:ih="urn:iconhue"><ih:meta/></g></svg>"#;
        let doc = SvgDocument::parse(markup).unwrap();
        let rendered = doc.to_string();
        assert_eq!(rendered, markup);

        let reparsed = roxmltree::Document::parse(&rendered).unwrap();
        let p = reparsed
            .descendants()
            .find(|n| n.has_tag_name("p"))
            .unwrap();
        assert_eq!(p.tag_name().namespace(), Some("http://www.w3.org/1999/xhtml"));
    }

    #[test]
    fn rejects_non_svg_roots() {
        let err = SvgDocument::parse("<html/>").unwrap_err();
        assert!(matches!(err, SvgError::NotSvg(tag) if tag == "html"));
    }

    #[test]
    fn rejects_malformed_markup() {
        assert!(matches!(
            SvgDocument::parse("<svg><g></svg>"),
            Err(SvgError::Xml(_))
        ));
    }

    #[test]
    fn writes_to_io() {
        let doc = SvgDocument::from_root(Element::svg());
        let mut out = Vec::new();
        doc.write_to(&mut out).unwrap();
        assert_eq!(out, b"<svg/>");
    }
}
