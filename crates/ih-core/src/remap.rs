//! Hue rotation toward a target color.
//!
//! Only the hue moves; each source color keeps its own saturation and
//! lightness, so a shaded icon stays shaded after being retinted.

use crate::color::{Hsl, Rgb};

/// Forward rotation in degrees `[0, 360)` that carries the hue of `source`
/// onto the hue of `target`.
#[must_use]
pub fn hue_angle(source: Rgb, target: Rgb) -> f64 {
    angle_between(source.to_hsl().h, target.to_hsl().h)
}

/// Rotate the hue of `source` by `angle` degrees.
#[must_use]
pub fn rotate_hue(source: Rgb, angle: f64) -> Rgb {
    rotate_hsl(source.to_hsl(), angle).to_rgb()
}

/// Rotate an HSL value, keeping saturation and lightness untouched.
#[must_use]
pub fn rotate_hsl(hsl: Hsl, angle: f64) -> Hsl {
    Hsl {
        h: (hsl.h + angle).rem_euclid(360.0),
        ..hsl
    }
}

/// Retint `source` toward `target` and format the result as `rgb(r, g, b)`.
///
/// Returns `None` when either color is not a recognized literal, in which
/// case the caller leaves the original value alone.
#[must_use]
pub fn recolor(source: &str, target: &str) -> Option<String> {
    let target = Rgb::parse_css(target)?;
    HueShift::new(target).apply(source)
}

/// A target color with its hue computed once, for applying to many source
/// colors during a tree walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueShift {
    target: Rgb,
    target_hue: f64,
}

impl HueShift {
    #[must_use]
    pub fn new(target: Rgb) -> Self {
        Self {
            target,
            target_hue: target.to_hsl().h,
        }
    }

    /// Build from a textual color; `None` if the text is not recognized.
    #[must_use]
    pub fn parse(target: &str) -> Option<Self> {
        Rgb::parse_css(target).map(Self::new)
    }

    #[must_use]
    pub const fn target(&self) -> Rgb {
        self.target
    }

    /// Shift a parsed color.
    #[must_use]
    pub fn shift(&self, source: Rgb) -> Rgb {
        let hsl = source.to_hsl();
        rotate_hsl(hsl, angle_between(hsl.h, self.target_hue)).to_rgb()
    }

    /// Shift a textual color, returning the `rgb(r, g, b)` form.
    #[must_use]
    pub fn apply(&self, source: &str) -> Option<String> {
        Rgb::parse_css(source).map(|color| self.shift(color).to_string())
    }
}

fn angle_between(from: f64, to: f64) -> f64 {
    let angle = to - from;
    if angle < 0.0 { angle + 360.0 } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn red_to_blue_is_pure_blue() {
        let red = Rgb::parse_hex("#ff0000").unwrap();
        let blue = Rgb::new(0, 0, 255);
        assert_eq!(red, Rgb::new(255, 0, 0));
        assert!((hue_angle(red, blue) - 240.0).abs() < 1e-9);
        assert_eq!(rotate_hue(red, 240.0), blue);
        assert_eq!(
            recolor("#ff0000", "#0000ff").as_deref(),
            Some("rgb(0, 0, 255)")
        );
    }

    #[test]
    fn angle_is_never_negative() {
        let blue = Rgb::new(0, 0, 255);
        let red = Rgb::new(255, 0, 0);
        assert!((hue_angle(blue, red) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn keeps_shading_of_the_source() {
        // Dark red retinted toward bright green stays dark.
        let result = recolor("#800000", "#00ff00").unwrap();
        assert_eq!(result, "rgb(0, 128, 0)");
    }

    #[test]
    fn unrecognized_inputs_yield_none() {
        assert_eq!(recolor("none", "#00ff00"), None);
        assert_eq!(recolor("currentColor", "#00ff00"), None);
        assert_eq!(recolor("url(#paint0)", "#00ff00"), None);
        assert_eq!(recolor("#ff0000", "green"), None);
        assert_eq!(recolor("", "#00ff00"), None);
    }

    #[test]
    fn hue_shift_matches_recolor() {
        let shift = HueShift::parse("rgb(10, 200, 30)").unwrap();
        for source in ["#123456", "#fa0", "rgb(200, 100, 50)", "#808080"] {
            assert_eq!(shift.apply(source), recolor(source, "rgb(10, 200, 30)"));
        }
        assert_eq!(shift.target(), Rgb::new(10, 200, 30));
    }

    #[test]
    fn gray_sources_stay_gray() {
        assert_eq!(
            recolor("#777777", "#ff00ff").as_deref(),
            Some("rgb(119, 119, 119)")
        );
    }

    #[test]
    fn recoloring_twice_is_stable() {
        for source in ["#ff0000", "#800000", "#4285f4", "#e53935", "#ffca28"] {
            for target in ["#0000ff", "#00ff00", "#2196f3"] {
                let once = recolor(source, target).unwrap();
                let twice = recolor(&once, target).unwrap();
                assert_eq!(once, twice, "{source} -> {target}");
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_self_angle_is_zero(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Rgb::new(r, g, b);
            prop_assert_eq!(hue_angle(color, color), 0.0);
        }

        #[test]
        fn prop_rotation_keeps_saturation_and_lightness(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            angle in 0.0_f64..360.0,
        ) {
            let hsl = Rgb::new(r, g, b).to_hsl();
            let rotated = rotate_hsl(hsl, angle);
            prop_assert_eq!(rotated.s, hsl.s);
            prop_assert_eq!(rotated.l, hsl.l);
            prop_assert!((0.0..360.0).contains(&rotated.h));

            let delta = (rotated.h - hsl.h).rem_euclid(360.0);
            let expected = angle.rem_euclid(360.0);
            let diff = (delta - expected).abs();
            prop_assert!(diff < 1e-6 || (360.0 - diff) < 1e-6);
        }

        #[test]
        fn prop_rounded_rotation_stays_close(
            h in 0.0_f64..360.0,
            s in 0.25_f64..1.0,
            l in 0.2_f64..0.8,
            angle in 0.0_f64..360.0,
        ) {
            let source = Hsl::new(h, s, l).to_rgb();
            let before = source.to_hsl();
            prop_assume!(before.s >= 0.25);

            let after = rotate_hue(source, angle).to_hsl();
            prop_assert!((after.l - before.l).abs() <= 0.5 / 255.0 + 1e-9);
            prop_assert!((after.s - before.s).abs() <= 0.05);

            let moved = (after.h - before.h).rem_euclid(360.0);
            let diff = (moved - angle).abs();
            prop_assert!(diff.min(360.0 - diff) <= 4.0);
        }
    }
}
