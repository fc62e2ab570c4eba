//! Output adapter for `smart-leds` drivers

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::{SmartLedsWrite, brightness};

use crate::OutputDriver;
use crate::color::Rgb;

/// Channel order expected on the wire
///
/// Most `smart-leds` drivers already reorder for their chip; use
/// [`ColorOrder::Rgb`] with those.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Grb,
    Brg,
    Rbg,
    Gbr,
    Bgr,
}

impl ColorOrder {
    /// Swizzle a color so the driver emits it in this order
    pub const fn arrange(self, color: Rgb) -> Rgb {
        let Rgb { r, g, b } = color;
        let (first, second, third) = match self {
            Self::Rgb => (r, g, b),
            Self::Grb => (g, r, b),
            Self::Brg => (b, r, g),
            Self::Rbg => (r, b, g),
            Self::Gbr => (g, b, r),
            Self::Bgr => (b, g, r),
        };
        Rgb {
            r: first,
            g: second,
            b: third,
        }
    }
}

/// [`OutputDriver`] over any `smart-leds` writer
///
/// The global brightness is applied in software with
/// [`smart_leds::brightness`]. A failed transmission drops the frame.
pub struct SmartLedsOutput<D> {
    writer: D,
    order: ColorOrder,
    brightness: u8,
    dropped_frames: u32,
}

impl<D> SmartLedsOutput<D>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: D) -> Self {
        Self::with_order(writer, ColorOrder::Rgb)
    }

    pub const fn with_order(writer: D, order: ColorOrder) -> Self {
        Self {
            writer,
            order,
            brightness: u8::MAX,
            dropped_frames: 0,
        }
    }

    /// Frames lost to transmission errors
    pub const fn dropped_frames(&self) -> u32 {
        self.dropped_frames
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn into_inner(self) -> D {
        self.writer
    }
}

impl<D> OutputDriver for SmartLedsOutput<D>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn write(&mut self, colors: &[Rgb]) {
        let order = self.order;
        let pixels = colors.iter().map(|color| order.arrange(*color));
        if self.writer.write(brightness(pixels, self.brightness)).is_err() {
            self.dropped_frames = self.dropped_frames.wrapping_add(1);
            #[cfg(feature = "esp32-log")]
            println!(
                "[SmartLedsOutput] frame dropped ({} total)",
                self.dropped_frames
            );
        }
    }
}
