//! Decorative glow for the bottom rows
//!
//! The glow is not simulated: on a slow cadence every masked cell gets a new
//! dim palette color weighted by the glow mask. At render time the glow
//! replaces the diffused value of every cell with a nonzero mask weight.

use rand::{Rng, RngCore};

use super::BrightnessOscillator;
use crate::cadence::Cadence;
use crate::color::{BLACK, Rgb, dim_color};
use crate::intensity::RuntimeParameters;
use crate::mask::{GLOW_ROWS, GlowMask, weight};
use crate::palette::Palette;

/// Smallest divisor applied to a glow color
pub const GLOW_DIVISOR_MIN: u8 = 10;
/// Largest divisor applied to a glow color
pub const GLOW_DIVISOR_MAX: u8 = 19;

/// Stored glow colors, indexed `[row][column]` from the top of the glow band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlowOverlay<const W: usize> {
    cells: [[Rgb; W]; GLOW_ROWS],
}

impl<const W: usize> Default for GlowOverlay<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> GlowOverlay<W> {
    pub const fn new() -> Self {
        Self {
            cells: [[BLACK; W]; GLOW_ROWS],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, row: usize) -> Rgb {
        self.cells[row][x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, row: usize, color: Rgb) {
        self.cells[row][x] = color;
    }

    /// Glow color shown at `(x, row)`, if the mask lets it through
    #[inline]
    pub fn visible(&self, mask: &GlowMask<W>, x: usize, row: usize) -> Option<Rgb> {
        (weight(mask, x, row) > 0.0).then(|| self.cells[row][x])
    }

    /// Pick new colors for every cell with a nonzero mask weight
    ///
    /// Cells with a zero weight keep whatever they held before.
    pub fn recompute<R: RngCore + ?Sized>(
        &mut self,
        mask: &GlowMask<W>,
        palette: &Palette,
        rng: &mut R,
    ) {
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (x, cell) in cells.iter_mut().enumerate() {
                let cell_weight = weight(mask, x, row);
                if cell_weight <= 0.0 {
                    continue;
                }
                let color = palette.pick(rng);
                let divisor = rng.gen_range(GLOW_DIVISOR_MIN..=GLOW_DIVISOR_MAX);
                *cell = dim_color(color, divisor, cell_weight);
            }
        }
    }
}

/// Slow-cadence post-process: glow overlay plus brightness oscillation
#[derive(Debug, Clone)]
pub struct Compositor<const W: usize> {
    overlay: GlowOverlay<W>,
    oscillator: BrightnessOscillator,
    cadence: Cadence,
}

impl<const W: usize> Compositor<W> {
    pub fn new(oscillator: BrightnessOscillator) -> Self {
        Self {
            overlay: GlowOverlay::new(),
            oscillator,
            cadence: Cadence::primed(),
        }
    }

    pub fn overlay(&self) -> &GlowOverlay<W> {
        &self.overlay
    }

    pub fn oscillator(&self) -> &BrightnessOscillator {
        &self.oscillator
    }

    /// Current global brightness
    pub fn brightness(&self) -> u8 {
        self.oscillator.level()
    }

    /// Advance the post-process counter
    ///
    /// Every `params.glow_cadence` calls the overlay is recomputed and the
    /// brightness takes one step. Returns true on those calls.
    pub fn step<R: RngCore + ?Sized>(
        &mut self,
        mask: &GlowMask<W>,
        palette: &Palette,
        params: &RuntimeParameters,
        rng: &mut R,
    ) -> bool {
        if !self.cadence.tick(params.glow_cadence) {
            return false;
        }
        self.overlay.recompute(mask, palette, rng);
        self.oscillator.step(params.brightness_ceiling, rng);
        true
    }

    /// Make the next step recompute the overlay regardless of the cadence
    pub fn restart(&mut self) {
        self.cadence = Cadence::primed();
    }

    /// Force the brightness to the ceiling
    pub fn flare(&mut self, ceiling: u8) {
        self.oscillator.flare(ceiling);
    }
}
