//! Color types and HSV→RGB conversion for particle and trail tinting.

use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color, 0.0-1.0 per channel.
///
/// This is the wire format the host renderer consumes; channels above 1.0
/// are legal and brighten the draw (hit flashes use 1.5).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba { a, ..self }
    }
}

/// Convert HSV to RGBA (alpha 1.0).
///
/// `h` is in degrees and wraps into [0, 360); `s` and `v` are 0.0-1.0.
/// Standard sector decomposition: chroma `c = v*s`, secondary component
/// `x`, match offset `m = v - c`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgba {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgba::new(r + m, g + m, b + m, 1.0)
}
