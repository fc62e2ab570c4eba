//! Fire simulation stages
//!
//! Each stage works on state passed in by reference; the renderer owns the
//! buffers and calls the stages in pipeline order once per frame.

mod diffusion;
mod glow;
mod injector;
mod oscillator;

pub use diffusion::{FIRE_KERNEL, Kernel, advance, diffuse};
pub use glow::{Compositor, GLOW_DIVISOR_MAX, GLOW_DIVISOR_MIN, GlowOverlay};
pub use injector::{EMBER_DIVISOR_MAX, ParticleInjector, ember_band_start};
pub use oscillator::{BRIGHTNESS_FLIP_PERCENT, BrightnessOscillator};
