#![forbid(unsafe_code)]

//! Color model and hue remapping shared by the iconhue crates.

mod color;
mod remap;

pub use color::{Hsl, ParseColorError, Rgb};
pub use remap::{HueShift, hue_angle, recolor, rotate_hsl, rotate_hue};
