use crate::color::Rgb;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Divide a color by an integer divisor and weight the result
///
/// Every channel is computed as `(channel / divisor) * weight` in floating
/// point and truncated, so the result never exceeds the source color.
/// The weight is clamped to `0.0..=1.0`; a zero divisor is treated as one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn dim_color(color: Rgb, divisor: u8, weight: f32) -> Rgb {
    let divisor = f32::from(divisor.max(1));
    let weight = weight.clamp(0.0, 1.0);
    let channel = |value: u8| ((f32::from(value) / divisor) * weight) as u8;

    Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Scale every channel of a color by a weight in `0.0..=1.0`
#[inline]
pub fn scale_color(color: Rgb, weight: f32) -> Rgb {
    dim_color(color, 1, weight)
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
