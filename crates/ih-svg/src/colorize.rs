//! Tree colorizer.
//!
//! Walks a document tree in pre-order and rotates the hue of every literal
//! paint color toward a target, keeping each color's saturation and
//! lightness.

use ih_core::HueShift;
use thiserror::Error;
use tracing::debug;

use crate::node::DocumentNode;
use crate::paint::resolve_paint;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorizeError {
    #[error("cannot colorize <{tag}>: not a graphics element")]
    NotGraphical { tag: String },
    #[error("unrecognized target color '{0}'")]
    InvalidTarget(String),
}

/// Counters for one colorizer run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorizeReport {
    pub nodes_visited: usize,
    /// Channels whose text parsed as a literal color.
    pub recognized: usize,
    pub rewritten: usize,
}

impl ColorizeReport {
    fn merge(&mut self, other: Self) {
        self.nodes_visited += other.nodes_visited;
        self.recognized += other.recognized;
        self.rewritten += other.rewritten;
    }
}

/// Recolor `root` and all of its descendants toward `target`.
///
/// Both preconditions are checked before anything is written: the root must
/// be a graphics element and the target must be a recognized color. Channels
/// that are absent or hold unrecognized text are left as they are.
pub fn colorize<N: DocumentNode>(
    root: &mut N,
    target: &str,
) -> Result<ColorizeReport, ColorizeError> {
    if !root.is_graphical() {
        return Err(ColorizeError::NotGraphical {
            tag: root.tag_name(),
        });
    }
    let shift =
        HueShift::parse(target).ok_or_else(|| ColorizeError::InvalidTarget(target.to_string()))?;

    let report = colorize_with(root, &shift);
    debug!(
        root = %root.tag_name(),
        color = %shift.target().to_hex(),
        nodes = report.nodes_visited,
        recognized = report.recognized,
        rewritten = report.rewritten,
        "colorized tree"
    );
    Ok(report)
}

/// Recolor without the root check, for callers that already hold a parsed
/// target.
pub fn colorize_with<N: DocumentNode>(node: &mut N, shift: &HueShift) -> ColorizeReport {
    let mut report = colorize_node(node, shift);
    node.for_each_child(&mut |child| report.merge(colorize_with(child, shift)));
    report
}

fn colorize_node<N: DocumentNode>(node: &mut N, shift: &HueShift) -> ColorizeReport {
    let mut report = ColorizeReport {
        nodes_visited: 1,
        ..ColorizeReport::default()
    };
    for paint in resolve_paint(node) {
        let Some(color) = paint.color else {
            continue;
        };
        report.recognized += 1;
        let shifted = shift.shift(color).to_string();
        paint.channel.write(node, &shifted);
        report.rewritten += 1;
    }
    report
}
