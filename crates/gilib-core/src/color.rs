use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color. Channels are kept as the bytes the canvas style string
/// carries; alpha stays a 0..1 float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build from 0..1 channels. Color channels are scaled by 255 and
    /// floored; alpha is stored as given.
    pub fn from_unit(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
            a,
        }
    }

    /// Canvas style string, e.g. `rgba(200,200,200,1)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

fn unit_to_byte(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v * 255.0).floor().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}
