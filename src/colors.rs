//! Color constants and conversions for the rendered image.

/// An RGB color, one byte per channel.
pub type Rgb = [u8; 3];

/// Dark gray the color buffer is cleared to.
pub const BACKGROUND: Rgb = [30, 30, 30];

/// Per-channel tint coefficients for the warm diffuse material.
pub const DIFFUSE_TINT: [f32; 3] = [255.0, 220.0, 180.0];

/// Converts a diffuse intensity in `[0, 1]` into the tinted output color.
///
/// Each channel is the intensity scaled by its tint coefficient, truncated
/// to a byte.
#[inline]
pub fn shade(intensity: f32) -> Rgb {
    [
        (intensity * DIFFUSE_TINT[0]) as u8,
        (intensity * DIFFUSE_TINT[1]) as u8,
        (intensity * DIFFUSE_TINT[2]) as u8,
    ]
}
