//! Physical LED addressing
//!
//! The strip runs column by column in a serpentine: even columns are wired
//! bottom to top, odd columns top to bottom.

use crate::color::{Rgb, scale_color};
use crate::grid::Grid;
use crate::mask::{GLOW_ROWS, GlowMask, VignetteMask, weight};
use crate::simulation::GlowOverlay;

/// Strip-ordered frame: `frame[x][i]` is LED `x * H + i`
pub type Frame<const W: usize, const H: usize> = [[Rgb; H]; W];

/// Position of a cell along its column after serpentine wiring
#[inline]
pub const fn serpentine_row(x: usize, y: usize, height: usize) -> usize {
    if x % 2 == 0 { height - y - 1 } else { y }
}

/// Strip index of a logical cell
#[inline]
pub const fn serpentine_index(x: usize, y: usize, height: usize) -> usize {
    x * height + serpentine_row(x, y, height)
}

/// Write one cell into the frame, applying the vignette weight
#[inline]
pub fn set_led<const W: usize, const H: usize>(
    frame: &mut Frame<W, H>,
    x: usize,
    y: usize,
    color: Rgb,
    vignette: Option<&VignetteMask<W, H>>,
) {
    let color = match vignette {
        Some(mask) => scale_color(color, weight(mask, x, y)),
        None => color,
    };
    frame[x][serpentine_row(x, y, H)] = color;
}

/// Map the grid and the glow overlay onto the strip
///
/// Cells in the bottom [`GLOW_ROWS`] rows with a nonzero glow weight show the
/// overlay instead of the diffused color.
pub fn render<const W: usize, const H: usize>(
    grid: &Grid<W, H>,
    overlay: &GlowOverlay<W>,
    glow_mask: &GlowMask<W>,
    vignette: Option<&VignetteMask<W, H>>,
    frame: &mut Frame<W, H>,
) {
    let glow_start = H.saturating_sub(GLOW_ROWS);
    for (x, y, color) in grid.cells() {
        let color = y
            .checked_sub(glow_start)
            .and_then(|row| overlay.visible(glow_mask, x, row))
            .unwrap_or(color);
        set_led(frame, x, y, color, vignette);
    }
}
