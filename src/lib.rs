#![no_std]

pub mod cadence;
pub mod channel;
pub mod color;
pub mod config;
pub mod frame_scheduler;
pub mod grid;
pub mod input;
pub mod intensity;
pub mod intent_processor;
pub mod layout;
pub mod mask;
pub mod output;
pub mod palette;
pub mod renderer;
pub mod simulation;

pub use config::{ConfigError, FireConfig};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use grid::Grid;
pub use input::{ButtonPress, FixedIntensity, IntensitySensor, ModeButton, NoSensor};
pub use intensity::{Band, IntensityConfig, IntensityController, RuntimeParameters};
pub use intent_processor::{FireIntent, IntentChannel, IntentReceiver, IntentSender};
pub use output::{ColorOrder, SmartLedsOutput};
pub use palette::{Palette, PaletteId};
pub use renderer::{FireRenderer, FireState, RenderedFrame};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Set the global brightness scalar applied to the next writes
    fn set_brightness(&mut self, brightness: u8);

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
