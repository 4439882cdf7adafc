//! Paint channels of a single node.
//!
//! A node can carry a color in five independent places. Each one is read and
//! written back through the same kind of access it came from, so a style
//! color never turns into a presentation attribute or the other way round.

use ih_core::Rgb;

use crate::node::DocumentNode;

/// One of the places a paint color can be specified on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintChannel {
    StyleFill,
    StyleStroke,
    Fill,
    Stroke,
    StopColor,
}

impl PaintChannel {
    /// All channels in the order they are processed.
    pub const ALL: [Self; 5] = [
        Self::StyleFill,
        Self::StyleStroke,
        Self::Fill,
        Self::Stroke,
        Self::StopColor,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StyleFill => "style:fill",
            Self::StyleStroke => "style:stroke",
            Self::Fill => "fill",
            Self::Stroke => "stroke",
            Self::StopColor => "stop-color",
        }
    }

    /// Raw channel text, if present.
    pub fn read<N: DocumentNode + ?Sized>(self, node: &N) -> Option<String> {
        match self {
            Self::StyleFill => node.style_property("fill"),
            Self::StyleStroke => node.style_property("stroke"),
            Self::Fill => node.attribute("fill"),
            Self::Stroke => node.attribute("stroke"),
            Self::StopColor => node.attribute("stop-color"),
        }
    }

    /// Write `value` back to the same channel.
    pub fn write<N: DocumentNode + ?Sized>(self, node: &mut N, value: &str) {
        match self {
            Self::StyleFill => node.set_style_property("fill", value),
            Self::StyleStroke => node.set_style_property("stroke", value),
            Self::Fill => node.set_attribute("fill", value),
            Self::Stroke => node.set_attribute("stroke", value),
            Self::StopColor => node.set_attribute("stop-color", value),
        }
    }
}

/// A channel that is present on a node and eligible for remapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaint {
    pub channel: PaintChannel,
    pub raw: String,
    /// Parsed literal color, `None` when the text is not a recognized
    /// literal (`url(#...)`, `currentColor`, named colors).
    pub color: Option<Rgb>,
}

/// Resolve the eligible paint channels of one node.
///
/// Empty channels are skipped, as is a style fill of `none`.
pub fn resolve_paint<N: DocumentNode + ?Sized>(node: &N) -> Vec<ResolvedPaint> {
    PaintChannel::ALL
        .into_iter()
        .filter_map(|channel| {
            let raw = channel.read(node)?;
            if raw.is_empty() || (channel == PaintChannel::StyleFill && raw == "none") {
                return None;
            }
            let color = Rgb::parse_css(&raw);
            Some(ResolvedPaint {
                channel,
                raw,
                color,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn resolves_all_five_channels() {
        let node = Element::stop()
            .style("fill: #f00; stroke: rgb(0, 0, 255)")
            .fill("#0f0")
            .stroke("url(#g)")
            .stop_color("#123456");
        let resolved = resolve_paint(&node);

        let channels: Vec<_> = resolved.iter().map(|p| p.channel).collect();
        assert_eq!(channels, PaintChannel::ALL);
        assert_eq!(resolved[0].color, Some(Rgb::new(255, 0, 0)));
        assert_eq!(resolved[1].color, Some(Rgb::new(0, 0, 255)));
        assert_eq!(resolved[2].color, Some(Rgb::new(0, 255, 0)));
        assert_eq!(resolved[3].raw, "url(#g)");
        assert_eq!(resolved[3].color, None);
        assert_eq!(resolved[4].color, Some(Rgb::new(0x12, 0x34, 0x56)));
    }

    #[test]
    fn skips_absent_empty_and_style_none() {
        let node = Element::path().style("fill: none; stroke:").fill("");
        assert!(resolve_paint(&node).is_empty());
    }

    #[test]
    fn attribute_none_is_resolved_but_unrecognized() {
        let node = Element::path().fill("none");
        let resolved = resolve_paint(&node);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].color, None);
    }

    #[test]
    fn writes_back_to_the_same_kind() {
        let mut node = Element::path().fill("#000").style("fill: #fff");
        PaintChannel::StyleFill.write(&mut node, "rgb(1, 2, 3)");
        assert_eq!(node.get_attr("fill"), Some("#000"));
        assert_eq!(node.get_attr("style"), Some("fill: rgb(1, 2, 3)"));

        PaintChannel::Fill.write(&mut node, "rgb(4, 5, 6)");
        assert_eq!(node.get_attr("fill"), Some("rgb(4, 5, 6)"));
        assert_eq!(node.get_attr("style"), Some("fill: rgb(1, 2, 3)"));
    }
}
