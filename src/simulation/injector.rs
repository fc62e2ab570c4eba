use rand::{Rng, RngCore};

use crate::cadence::Cadence;
use crate::color::dim_color;
use crate::grid::Grid;
use crate::palette::Palette;

/// Largest divisor applied to a freshly injected ember
pub const EMBER_DIVISOR_MAX: u8 = 6;

/// First row of the ember band (the bottom sixth of the grid)
pub const fn ember_band_start(height: usize) -> usize {
    5 * height / 6
}

/// Row for a raw roll in `0..height`, biased into the bottom sixth
#[inline]
fn ember_row(height: usize, roll: usize) -> usize {
    (ember_band_start(height) + roll / 6).min(height.saturating_sub(1))
}

/// Seeds embers into the bottom band of the grid
#[derive(Debug, Clone, Default)]
pub struct ParticleInjector {
    cadence: Cadence,
}

impl ParticleInjector {
    /// Create an injector that drops its first ember on the first call
    pub const fn new() -> Self {
        Self {
            cadence: Cadence::primed(),
        }
    }

    /// Advance the ejection counter and maybe drop an ember
    ///
    /// When the counter reaches `cadence`, a random palette color divided by
    /// a random divisor in `1..=EMBER_DIVISOR_MAX` overwrites one random cell
    /// of the bottom band. Returns the mutated cell, if any.
    pub fn inject<R, const W: usize, const H: usize>(
        &mut self,
        grid: &mut Grid<W, H>,
        palette: &Palette,
        cadence: u16,
        rng: &mut R,
    ) -> Option<(usize, usize)>
    where
        R: RngCore + ?Sized,
    {
        if !self.cadence.tick(cadence) {
            return None;
        }

        let x = rng.gen_range(0..W);
        let y = ember_row(H, rng.gen_range(0..H));
        let color = palette.pick(rng);
        let divisor = rng.gen_range(1..=EMBER_DIVISOR_MAX);

        grid.set(x, y, dim_color(color, divisor, 1.0));
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ember_row_stays_in_bottom_sixth() {
        for height in 1..=64 {
            for roll in 0..height {
                let row = ember_row(height, roll);
                assert!(row < height);
                assert!(row >= ember_band_start(height));
            }
        }
    }

    #[test]
    fn sixteen_rows_use_last_three() {
        assert_eq!(ember_row(16, 0), 13);
        assert_eq!(ember_row(16, 15), 15);
    }
}
