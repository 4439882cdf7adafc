//! Integration tests for the parse, dedupe, colorize, render pipeline.

use ih_core::Rgb;
use ih_svg::{Element, SvgDocument, colorize, make_ids_unique};

const ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 32 32">
  <defs>
    <linearGradient id="shade">
      <stop offset="0" stop-color="#e53935"/>
      <stop offset="1" stop-color="#b71c1c"/>
    </linearGradient>
    <path id="leaf" d="M4 4h24v24H4z"/>
  </defs>
  <use xlink:href="#leaf" fill="url(#shade)"/>
  <path d="M8 8h16v16H8z" style="fill:#ffcdd2;stroke:#c62828"/>
  <circle cx="16" cy="16" r="2" fill="none" stroke="currentColor"/>
  <text x="2" y="30">Leaf <tspan fill="#e53935">red</tspan> icon</text>
</svg>"##;

fn find<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    root.descendants().filter(|e| e.tag() == tag).collect()
}

/// Parse, deduplicate, colorize and serialize; the result must reparse and
/// keep every reference pointing at a renamed id.
#[test]
fn pipeline_keeps_references_consistent() {
    let mut document = SvgDocument::parse(ICON).unwrap();
    let ids = make_ids_unique(document.root_mut());
    assert_eq!(ids.len(), 2);

    let report = colorize(document.root_mut(), "#43a047").unwrap();
    assert_eq!(report.recognized, 5, "two stops, style fill and stroke, tspan fill");

    let rendered = document.to_string();
    let reparsed = SvgDocument::parse(&rendered).unwrap();
    let root = reparsed.root();

    let leaf = ids.fresh_id("leaf").unwrap();
    let shade = ids.fresh_id("shade").unwrap();
    let use_elem = find(root, "use")[0];
    assert_eq!(use_elem.get_attr("xlink:href"), Some(format!("#{leaf}").as_str()));
    assert_eq!(use_elem.get_attr("fill"), Some(format!("url(#{shade})").as_str()));
    assert!(find(root, "path").iter().any(|p| p.get_attr("id") == Some(leaf.as_str())));
}

/// Saturation and lightness survive; only the hue moves to the target's.
#[test]
fn pipeline_preserves_shade_and_moves_hue() {
    let mut document = SvgDocument::parse(ICON).unwrap();
    colorize(document.root_mut(), "#1e88e5").unwrap();
    let target_hue = Rgb::parse_css("#1e88e5").unwrap().to_hsl().h;

    let before = ["#e53935", "#b71c1c"].map(|c| Rgb::parse_css(c).unwrap().to_hsl());
    let stops = find(document.root(), "stop");
    for (stop, original) in stops.iter().zip(before) {
        let color = Rgb::parse_css(stop.get_attr("stop-color").unwrap()).unwrap();
        let hsl = color.to_hsl();
        assert!((hsl.l - original.l).abs() <= 1.0 / 255.0, "lightness drifted: {color}");
        assert!((hsl.s - original.s).abs() <= 0.05, "saturation drifted: {color}");
        assert!((hsl.h - target_hue).abs() <= 4.0, "hue {} vs {target_hue}", hsl.h);
    }

    let circle = find(document.root(), "circle")[0];
    assert_eq!(circle.get_attr("fill"), Some("none"));
    assert_eq!(circle.get_attr("stroke"), Some("currentColor"));
}

/// Recoloring never moves or drops the icon's text.
#[test]
fn pipeline_keeps_text_in_place() {
    let mut document = SvgDocument::parse(ICON).unwrap();
    make_ids_unique(document.root_mut());
    colorize(document.root_mut(), "#1e88e5").unwrap();

    let rendered = document.to_string();
    assert!(
        rendered.contains(r#"<text x="2" y="30">Leaf <tspan fill="rgb("#),
        "got: {rendered}"
    );
    assert!(rendered.contains(r#")">red</tspan> icon</text>"#), "got: {rendered}");
}
