//! Static weighting tables
//!
//! Both tables are indexed `[row][column]` and hold weights in `0.0..=1.0`.
//! The vignette shapes the visible silhouette at render time only. The glow
//! mask marks the bottom cells that receive the decorative overlay.

/// Number of bottom rows covered by the glow overlay
pub const GLOW_ROWS: usize = 4;

/// Per-cell render weight, same shape as the grid
pub type VignetteMask<const W: usize, const H: usize> = [[f32; W]; H];

/// Per-cell glow weight for the bottom [`GLOW_ROWS`] rows
pub type GlowMask<const W: usize> = [[f32; W]; GLOW_ROWS];

/// Read a weight, clamped to `0.0..=1.0`
#[inline]
pub fn weight<const W: usize, const R: usize>(mask: &[[f32; W]; R], x: usize, row: usize) -> f32 {
    mask[row][x].clamp(0.0, 1.0)
}

pub static NARROW_VIGNETTE: VignetteMask<5, 16> = [
    [0.1, 0.2, 1.0, 0.2, 0.1],
    [0.1, 0.3, 1.0, 0.3, 0.1],
    [0.2, 0.4, 1.0, 0.4, 0.2],
    [0.2, 0.5, 1.0, 0.5, 0.2],
    [0.3, 0.7, 1.0, 0.7, 0.3],
    [0.3, 0.9, 1.0, 0.9, 0.3],
    [0.7, 1.0, 1.0, 1.0, 0.7],
    [0.8, 1.0, 1.0, 1.0, 0.8],
    [0.9, 1.0, 1.0, 1.0, 0.9],
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [0.4, 1.0, 1.0, 1.0, 0.4],
    [0.2, 0.5, 1.0, 0.5, 0.2],
];

pub static NARROW_GLOW: GlowMask<5> = [
    [0.5, 0.2, 0.5, 0.2, 0.5],
    [0.5, 0.5, 1.0, 0.5, 0.5],
    [0.5, 1.0, 1.0, 1.0, 0.5],
    [0.2, 0.5, 1.0, 0.5, 0.2],
];

pub static WIDE_VIGNETTE: VignetteMask<7, 16> = [
    [0.0, 0.1, 0.2, 1.0, 0.2, 0.1, 0.0],
    [0.0, 0.1, 0.3, 1.0, 0.3, 0.1, 0.0],
    [0.1, 0.2, 0.4, 1.0, 0.4, 0.2, 0.1],
    [0.1, 0.2, 0.5, 1.0, 0.5, 0.2, 0.1],
    [0.2, 0.3, 0.7, 1.0, 0.7, 0.3, 0.2],
    [0.2, 0.3, 0.9, 1.0, 0.9, 0.3, 0.2],
    [0.4, 0.7, 1.0, 1.0, 1.0, 0.7, 0.4],
    [0.5, 0.8, 1.0, 1.0, 1.0, 0.8, 0.5],
    [0.7, 0.9, 1.0, 1.0, 1.0, 0.9, 0.7],
    [0.9, 1.0, 1.0, 1.0, 1.0, 1.0, 0.9],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    [0.3, 0.4, 1.0, 1.0, 1.0, 0.4, 0.3],
    [0.1, 0.2, 0.5, 1.0, 0.5, 0.2, 0.1],
];

// Outer bottom corners stay dark on the wide lamp
pub static WIDE_GLOW: GlowMask<7> = [
    [0.0, 0.5, 0.2, 0.5, 0.2, 0.5, 0.0],
    [0.2, 0.5, 0.5, 1.0, 0.5, 0.5, 0.2],
    [0.2, 0.5, 1.0, 1.0, 1.0, 0.5, 0.2],
    [0.0, 0.2, 0.5, 1.0, 0.5, 0.2, 0.0],
];
