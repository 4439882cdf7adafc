//! RGB and HSL color values.
//!
//! Parsing is narrow: only `#rgb`, `#rrggbb` and `rgb(r, g, b)`
//! are recognized. Anything else (named colors, `rgba()`, `hsl()`, `none`,
//! `currentColor`, gradient references) is reported as `None` so callers can
//! leave the value untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Error returned when a color string is not in a recognized format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color '{0}': expected #rgb, #rrggbb or rgb(r, g, b)")]
pub struct ParseColorError(String);

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`. The leading `#` is optional and digits are
    /// case-insensitive.
    #[must_use]
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if !digits.is_ascii() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            3 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 17);
                Some(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    /// Parse the functional form `rgb(r, g, b)`.
    ///
    /// Whitespace is only allowed after each comma. Channels must be plain
    /// decimal integers that fit in a byte.
    #[must_use]
    pub fn parse_functional(text: &str) -> Option<Self> {
        let inner = text.strip_prefix("rgb(")?.strip_suffix(')')?;
        let mut parts = inner.split(',');

        let first = parse_channel(parts.next()?, false)?;
        let second = parse_channel(parts.next()?, true)?;
        let third = parse_channel(parts.next()?, true)?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(first, second, third))
    }

    /// Parse any recognized textual color: hex when the text starts with `#`,
    /// functional when it starts with `rgb`.
    #[must_use]
    pub fn parse_css(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.starts_with('#') {
            Self::parse_hex(text)
        } else if text.starts_with("rgb") {
            Self::parse_functional(text)
        } else {
            None
        }
    }

    /// Format as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: sector * 60.0,
            s,
            l,
        }
    }
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert back to RGB, rounding each channel to the nearest integer.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = if self.s == 0.0 {
            (self.l, self.l, self.l)
        } else {
            let q = if self.l < 0.5 {
                self.l * (1.0 + self.s)
            } else {
                self.l + self.s - self.l * self.s
            };
            let p = 2.0 * self.l - q;
            let t = self.h / 360.0;
            (
                hue_to_channel(p, q, t + 1.0 / 3.0),
                hue_to_channel(p, q, t),
                hue_to_channel(p, q, t - 1.0 / 3.0),
            )
        };

        Rgb::new(to_byte(r), to_byte(g), to_byte(b))
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn parse_channel(part: &str, allow_leading_space: bool) -> Option<u8> {
    let digits = if allow_leading_space {
        part.trim_start()
    } else {
        part
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_css(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::parse_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::parse_hex("FF8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::parse_hex("#f80"), Some(Rgb::new(255, 136, 0)));
        assert_eq!(Rgb::parse_hex("#AbC"), Some(Rgb::new(170, 187, 204)));
    }

    #[test]
    fn rejects_other_hex_shapes() {
        assert_eq!(Rgb::parse_hex("#ff80"), None);
        assert_eq!(Rgb::parse_hex("#ff800000"), None);
        assert_eq!(Rgb::parse_hex("#gg0000"), None);
        assert_eq!(Rgb::parse_hex("#+1f"), None);
        assert_eq!(Rgb::parse_hex(""), None);
    }

    #[test]
    fn parses_functional_rgb() {
        assert_eq!(
            Rgb::parse_functional("rgb(12, 34, 56)"),
            Some(Rgb::new(12, 34, 56))
        );
        assert_eq!(
            Rgb::parse_functional("rgb(12,34,56)"),
            Some(Rgb::new(12, 34, 56))
        );
    }

    #[test]
    fn rejects_other_functional_shapes() {
        assert_eq!(Rgb::parse_functional("rgba(1, 2, 3, 0.5)"), None);
        assert_eq!(Rgb::parse_functional("rgb( 1, 2, 3)"), None);
        assert_eq!(Rgb::parse_functional("rgb(1, 2)"), None);
        assert_eq!(Rgb::parse_functional("rgb(1, 2, 3, 4)"), None);
        assert_eq!(Rgb::parse_functional("rgb(1.5, 2, 3)"), None);
        assert_eq!(Rgb::parse_functional("rgb(300, 2, 3)"), None);
    }

    #[test]
    fn out_of_range_channels_are_neither_clamped_nor_wrapped() {
        assert_eq!(
            Rgb::parse_functional("rgb(255, 0, 255)"),
            Some(Rgb::new(255, 0, 255))
        );
        assert_eq!(Rgb::parse_functional("rgb(256, 0, 0)"), None);
        assert_eq!(Rgb::parse_functional("rgb(0, 0, 99999999999)"), None);
        assert_eq!(Rgb::parse_css("rgb(0, 512, 0)"), None);
    }

    #[test]
    fn parse_css_dispatches_on_prefix() {
        assert_eq!(Rgb::parse_css(" #fff "), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse_css("rgb(0, 0, 0)"), Some(Rgb::new(0, 0, 0)));
        assert_eq!(Rgb::parse_css("fff"), None);
        assert_eq!(Rgb::parse_css("none"), None);
        assert_eq!(Rgb::parse_css("url(#grad)"), None);
        assert_eq!(Rgb::parse_css("red"), None);
    }

    #[test]
    fn from_str_reports_input() {
        let err = "tomato".parse::<Rgb>().unwrap_err();
        assert!(err.to_string().contains("tomato"));
        assert_eq!("#000".parse::<Rgb>(), Ok(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn display_and_hex_formatting() {
        let color = Rgb::new(1, 2, 255);
        assert_eq!(color.to_string(), "rgb(1, 2, 255)");
        assert_eq!(color.to_hex(), "#0102ff");
    }

    #[test]
    fn hsl_of_primaries() {
        let red = Rgb::new(255, 0, 0).to_hsl();
        assert!((red.h - 0.0).abs() < 1e-9);
        assert!((red.s - 1.0).abs() < 1e-9);
        assert!((red.l - 0.5).abs() < 1e-9);

        assert!((Rgb::new(0, 255, 0).to_hsl().h - 120.0).abs() < 1e-9);
        assert!((Rgb::new(0, 0, 255).to_hsl().h - 240.0).abs() < 1e-9);
        assert!((Rgb::new(255, 0, 255).to_hsl().h - 300.0).abs() < 1e-9);
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        for value in [0_u8, 77, 128, 255] {
            let hsl = Rgb::new(value, value, value).to_hsl();
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert_eq!(hsl.to_rgb(), Rgb::new(value, value, value));
        }
    }

    #[test]
    fn blue_from_hsl() {
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_rgb(), Rgb::new(0, 0, 255));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_hsl_round_trip_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let original = Rgb::new(r, g, b);
            let back = original.to_hsl().to_rgb();
            prop_assert!(original.r.abs_diff(back.r) <= 1);
            prop_assert!(original.g.abs_diff(back.g) <= 1);
            prop_assert!(original.b.abs_diff(back.b) <= 1);
        }

        #[test]
        fn prop_hue_stays_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hsl = Rgb::new(r, g, b).to_hsl();
            prop_assert!((0.0..360.0).contains(&hsl.h));
            prop_assert!((0.0..=1.0).contains(&hsl.s));
            prop_assert!((0.0..=1.0).contains(&hsl.l));
        }
    }
}
