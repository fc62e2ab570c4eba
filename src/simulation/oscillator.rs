//! Global brightness oscillator
//!
//! A bounded random walk: the brightness moves by a fixed step every tick,
//! bounces off the floor and the current ceiling, and occasionally reverses
//! on its own to add flicker.

use libm::fabsf;
use rand::{Rng, RngCore};

/// Chance (in percent) that a tick reverses the direction on its own
pub const BRIGHTNESS_FLIP_PERCENT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessOscillator {
    brightness: f32,
    speed: f32,
    step: f32,
    floor: f32,
}

impl BrightnessOscillator {
    /// Start halfway between the floor and the ceiling, rising
    pub fn new(floor: u8, ceiling: u8, step: f32) -> Self {
        let floor = f32::from(floor);
        let ceiling = f32::from(ceiling).max(floor);
        let step = fabsf(step);
        Self {
            brightness: floor + (ceiling - floor) / 2.0,
            speed: step,
            step,
            floor,
        }
    }

    /// Current brightness as a driver scalar
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn level(&self) -> u8 {
        self.brightness as u8
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Signed step applied on the next tick
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn floor(&self) -> f32 {
        self.floor
    }

    /// Tick with a random reversal drawn from `rng`
    pub fn step<R: RngCore + ?Sized>(&mut self, ceiling: u8, rng: &mut R) -> u8 {
        let flip = rng.gen_ratio(BRIGHTNESS_FLIP_PERCENT, 100);
        self.step_with(ceiling, flip)
    }

    /// Tick with an explicit reversal decision
    ///
    /// A value outside the band is clamped first and the step is forced to
    /// point back inside (negative at the ceiling, positive at the floor).
    /// After the step, an overshoot is reflected back into
    /// `floor..=ceiling`, so the value never leaves the band.
    pub fn step_with(&mut self, ceiling: u8, flip: bool) -> u8 {
        let ceiling = f32::from(ceiling).max(self.floor);

        if self.brightness > ceiling {
            self.brightness = ceiling;
            self.speed = -self.step;
        }
        if self.brightness < self.floor {
            self.brightness = self.floor;
            self.speed = self.step;
        }

        if flip {
            self.speed = -self.speed;
        }

        self.brightness += self.speed;

        if self.brightness > ceiling {
            self.brightness = ceiling - (self.brightness - ceiling);
            self.speed = -self.step;
        }
        if self.brightness < self.floor {
            self.brightness = self.floor + (self.floor - self.brightness);
            self.speed = self.step;
        }
        // A band narrower than one step can still overshoot after reflection
        self.brightness = self.brightness.clamp(self.floor, ceiling);

        self.level()
    }

    /// Jump straight to the ceiling and start falling
    pub fn flare(&mut self, ceiling: u8) {
        self.brightness = f32::from(ceiling).max(self.floor);
        self.speed = -self.step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflects_overshoot_at_ceiling() {
        let mut oscillator = BrightnessOscillator::new(40, 100, 7.0);
        oscillator.flare(100);
        // Falling from the ceiling, a flip sends it up by one step
        oscillator.step_with(100, true);
        assert_eq!(oscillator.brightness(), 93.0);
        assert_eq!(oscillator.speed(), -7.0);
    }

    #[test]
    fn narrow_band_pins_value() {
        let mut oscillator = BrightnessOscillator::new(40, 42, 7.0);
        for flip in [false, true, true, false, true] {
            let level = oscillator.step_with(42, flip);
            assert!((40..=42).contains(&level));
        }
    }
}
