//! Color type and 8-bit packing.

use crate::{Interval, Vec3};

/// Linear RGB color (`x` = red, `y` = green, `z` = blue).
///
/// Channels are unbounded during shading; they are only brought into
/// `[0, 1]` by the renderer's exposure pass and quantized by [`pack_rgba`].
pub type Color = Vec3;

#[inline]
fn quantize(channel: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    Interval::BYTE.clamp((channel * 255.0).round()) as u8
}

/// Quantize a color into an opaque packed RGBA pixel.
///
/// Each channel becomes `clamp(round(c * 255))`. The packing puts red in the
/// low byte and alpha in the high byte, so a `&[u32]` of packed pixels is an
/// RGBA8 byte stream on little-endian targets.
pub fn pack_rgba(color: Color) -> u32 {
    u32::from_le_bytes([quantize(color.x), quantize(color.y), quantize(color.z), 255])
}

/// Split a packed pixel back into `[r, g, b, a]`.
pub fn unpack_rgba(pixel: u32) -> [u8; 4] {
    pixel.to_le_bytes()
}

/// View a packed pixel buffer as raw RGBA8 bytes.
pub fn rgba_bytes(pixels: &[u32]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rgba_rounds_and_clamps() {
        let pixel = pack_rgba(Color::new(1.0, 0.5, -3.0));
        assert_eq!(unpack_rgba(pixel), [255, 128, 0, 255]);

        let bright = pack_rgba(Color::splat(7.5));
        assert_eq!(unpack_rgba(bright), [255, 255, 255, 255]);
    }

    #[test]
    fn test_pack_rgba_nan_is_black() {
        let pixel = pack_rgba(Color::new(f32::NAN, 0.0, 0.0));
        assert_eq!(unpack_rgba(pixel), [0, 0, 0, 255]);
    }

    #[test]
    fn test_rgba_bytes_layout() {
        let pixels = [pack_rgba(Color::new(1.0, 0.0, 0.0)), pack_rgba(Color::new(0.0, 0.0, 1.0))];
        let bytes = rgba_bytes(&pixels);

        assert_eq!(bytes.len(), 8);
        if cfg!(target_endian = "little") {
            assert_eq!(bytes, &[255, 0, 0, 255, 0, 0, 255, 255]);
        }
    }
}
