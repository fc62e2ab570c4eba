//! Intensity control
//!
//! Maps a raw sensor reading onto the runtime parameters of the simulation.
//! Low readings give a calm fire, high readings a raging one: embers drop
//! more often, diffusion is less damped, the brightness ceiling rises and
//! the glow refreshes faster.

use libm::roundf;

/// Parameter value that can be interpolated inside a [`Band`]
pub trait BandValue: Copy + PartialOrd {
    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;
}

impl BandValue for f32 {
    fn to_f32(self) -> f32 {
        self
    }

    fn from_f32(value: f32) -> Self {
        value
    }
}

impl BandValue for u8 {
    fn to_f32(self) -> f32 {
        f32::from(self)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_f32(value: f32) -> Self {
        roundf(value) as u8
    }
}

impl BandValue for u16 {
    fn to_f32(self) -> f32 {
        f32::from(self)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_f32(value: f32) -> Self {
        roundf(value) as u16
    }
}

/// Range of a runtime parameter, from its calm to its raging extreme
///
/// Either end may be the larger one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub cold: T,
    pub hot: T,
}

impl<T: BandValue> Band<T> {
    pub const fn new(cold: T, hot: T) -> Self {
        Self { cold, hot }
    }

    /// Smaller end of the band
    pub fn low(&self) -> T {
        if self.hot < self.cold { self.hot } else { self.cold }
    }

    /// Larger end of the band
    pub fn high(&self) -> T {
        if self.hot > self.cold { self.hot } else { self.cold }
    }

    /// Clamp a value into the band
    pub fn clamp(&self, value: T) -> T {
        let (low, high) = (self.low(), self.high());
        if value < low {
            low
        } else if value > high {
            high
        } else {
            value
        }
    }

    /// Interpolate linearly between the extremes
    ///
    /// `t` is the heat in `0.0..=1.0`; both ends return the configured
    /// extreme exactly.
    pub fn at(&self, t: f32) -> T {
        if t <= 0.0 {
            return self.cold;
        }
        if t >= 1.0 {
            return self.hot;
        }
        let cold = self.cold.to_f32();
        let value = cold + (self.hot.to_f32() - cold) * t;
        self.clamp(T::from_f32(value))
    }
}

/// Intensity mapping configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityConfig {
    /// Frames between two embers
    pub ejection_cadence: Band<u16>,
    /// Diffusion divider
    pub divider: Band<f32>,
    /// Upper bound of the oscillating brightness
    pub brightness_ceiling: Band<u8>,
    /// Frames between two glow refreshes
    pub glow_cadence: Band<u16>,
    /// Reading that maps to the hot extreme
    pub max_reading: u16,
    /// Reading used when no sensor is fitted
    pub default_reading: u16,
    /// Jump between consecutive readings that triggers a flare
    pub flare_delta: Option<u16>,
}

/// Parameters derived from the intensity every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeParameters {
    pub ejection_cadence: u16,
    pub divider: f32,
    pub brightness_ceiling: u8,
    pub glow_cadence: u16,
}

/// Result of one intensity adjustment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub params: RuntimeParameters,
    /// The reading jumped far enough to force the brightness to the ceiling
    pub flare: bool,
}

/// Turns sensor readings into runtime parameters
#[derive(Debug, Clone)]
pub struct IntensityController {
    config: IntensityConfig,
    last_reading: Option<u16>,
}

impl IntensityController {
    pub const fn new(config: IntensityConfig) -> Self {
        Self {
            config,
            last_reading: None,
        }
    }

    pub const fn config(&self) -> &IntensityConfig {
        &self.config
    }

    /// Heat in `0.0..=1.0` for a raw reading
    pub fn heat(&self, reading: u16) -> f32 {
        if self.config.max_reading == 0 {
            return 1.0;
        }
        let reading = reading.min(self.config.max_reading);
        f32::from(reading) / f32::from(self.config.max_reading)
    }

    /// Parameters for a reading, without flare tracking
    pub fn parameters(&self, reading: u16) -> RuntimeParameters {
        let t = self.heat(reading);
        RuntimeParameters {
            ejection_cadence: self.config.ejection_cadence.at(t),
            divider: self.config.divider.at(t),
            brightness_ceiling: self.config.brightness_ceiling.at(t),
            glow_cadence: self.config.glow_cadence.at(t),
        }
    }

    /// Derive parameters from the latest reading
    ///
    /// `None` means the sensor is absent; the configured default reading is
    /// used and no flare is ever reported.
    pub fn adjust(&mut self, reading: Option<u16>) -> Adjustment {
        let Some(reading) = reading else {
            return Adjustment {
                params: self.parameters(self.config.default_reading),
                flare: false,
            };
        };

        let flare = match (self.config.flare_delta, self.last_reading) {
            (Some(delta), Some(last)) => reading.abs_diff(last) >= delta,
            _ => false,
        };
        self.last_reading = Some(reading);

        Adjustment {
            params: self.parameters(reading),
            flare,
        }
    }
}
