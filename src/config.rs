//! Start-up configuration
//!
//! Everything that differs between lamp builds lives here as data: palettes,
//! masks, kernel and numeric bands. The presets cover the 5x16 and the 7x16
//! lamps.

use core::fmt;

use embassy_time::Duration;

use crate::intensity::{Band, IntensityConfig};
use crate::mask::{
    GLOW_ROWS, GlowMask, NARROW_GLOW, NARROW_VIGNETTE, VignetteMask, WIDE_GLOW, WIDE_VIGNETTE,
};
use crate::palette::{BUILTIN_PALETTES, Palette};
use crate::simulation::{FIRE_KERNEL, Kernel};

/// Default delay between two frames
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(20);

/// Lowest brightness the oscillator may reach
pub const MIN_BRIGHTNESS: u8 = 40;

/// Brightness change per oscillator tick
pub const BRIGHTNESS_STEP: f32 = 7.0;

/// Sensor reading that maps to the hottest fire
pub const MAX_SENSOR_READING: u16 = 1000;

/// Reason a configuration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No palettes configured
    EmptyPalettes,
    /// Initial palette index is past the end of the table
    PaletteIndexOutOfRange,
    /// Grid has no columns or is shorter than the glow band
    GridTooSmall,
    /// Divider band reaches zero or below
    InvalidDivider,
    /// Brightness ceiling band dips below the brightness floor
    CeilingBelowFloor,
    /// A cadence band reaches zero
    ZeroCadence,
    /// Sensor range is empty
    EmptySensorRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::EmptyPalettes => "no palettes configured",
            Self::PaletteIndexOutOfRange => "initial palette index out of range",
            Self::GridTooSmall => "grid is smaller than the glow band",
            Self::InvalidDivider => "diffusion divider must be positive",
            Self::CeilingBelowFloor => "brightness ceiling below the brightness floor",
            Self::ZeroCadence => "cadence must be at least one frame",
            Self::EmptySensorRange => "sensor range must not be empty",
        };
        f.write_str(message)
    }
}

/// Configuration for the fire renderer
#[derive(Debug, Clone, Copy)]
pub struct FireConfig<const W: usize, const H: usize> {
    pub palettes: &'static [Palette],
    pub palette_index: usize,
    pub kernel: Kernel,
    /// Render-time vignette; `None` disables masking
    pub vignette: Option<&'static VignetteMask<W, H>>,
    pub glow_mask: &'static GlowMask<W>,
    pub intensity: IntensityConfig,
    pub min_brightness: u8,
    pub brightness_step: f32,
    pub frame_duration: Duration,
}

impl FireConfig<5, 16> {
    /// Narrow 5x16 lamp
    pub const NARROW: Self = Self {
        palettes: &BUILTIN_PALETTES,
        palette_index: 0,
        kernel: FIRE_KERNEL,
        vignette: Some(&NARROW_VIGNETTE),
        glow_mask: &NARROW_GLOW,
        intensity: IntensityConfig {
            ejection_cadence: Band::new(5, 2),
            divider: Band::new(2.2, 2.1),
            brightness_ceiling: Band::new(MIN_BRIGHTNESS, 250),
            glow_cadence: Band::new(2, 1),
            max_reading: MAX_SENSOR_READING,
            default_reading: 0,
            flare_delta: None,
        },
        min_brightness: MIN_BRIGHTNESS,
        brightness_step: BRIGHTNESS_STEP,
        frame_duration: DEFAULT_FRAME_DURATION,
    };
}

impl FireConfig<7, 16> {
    /// Wide 7x16 lamp with a sensor and a mode button
    pub const WIDE: Self = Self {
        palettes: &BUILTIN_PALETTES,
        palette_index: 0,
        kernel: FIRE_KERNEL,
        vignette: Some(&WIDE_VIGNETTE),
        glow_mask: &WIDE_GLOW,
        intensity: IntensityConfig {
            ejection_cadence: Band::new(6, 2),
            divider: Band::new(2.3, 2.09),
            brightness_ceiling: Band::new(110, 250),
            glow_cadence: Band::new(4, 1),
            max_reading: MAX_SENSOR_READING,
            default_reading: MAX_SENSOR_READING / 2,
            flare_delta: Some(150),
        },
        min_brightness: MIN_BRIGHTNESS,
        brightness_step: BRIGHTNESS_STEP,
        frame_duration: Duration::from_millis(15),
    };
}

impl<const W: usize, const H: usize> FireConfig<W, H> {
    /// Check the invariants the pipeline relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palettes.is_empty() {
            return Err(ConfigError::EmptyPalettes);
        }
        if self.palette_index >= self.palettes.len() {
            return Err(ConfigError::PaletteIndexOutOfRange);
        }
        if W == 0 || H < GLOW_ROWS {
            return Err(ConfigError::GridTooSmall);
        }

        let intensity = &self.intensity;
        if intensity.divider.low() <= 0.0 {
            return Err(ConfigError::InvalidDivider);
        }
        if intensity.brightness_ceiling.low() < self.min_brightness {
            return Err(ConfigError::CeilingBelowFloor);
        }
        if intensity.ejection_cadence.low() == 0 || intensity.glow_cadence.low() == 0 {
            return Err(ConfigError::ZeroCadence);
        }
        if intensity.max_reading == 0 {
            return Err(ConfigError::EmptySensorRange);
        }

        Ok(())
    }
}
