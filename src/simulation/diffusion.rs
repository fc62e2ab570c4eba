//! Convolution-based diffusion
//!
//! Every cell of the next frame is a weighted sum of its 3x3 neighbourhood in
//! the current frame, divided by a dynamic divider. The stock kernel pulls
//! mostly from the cell itself and the row below, so heat rises.

use crate::color::Rgb;
use crate::grid::Grid;

/// 3x3 convolution kernel, indexed `[dy + 1][dx + 1]`
///
/// Row 0 weighs the neighbours above a cell, row 2 the neighbours below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [[f32; 3]; 3],
}

/// Upward-biased flame kernel
pub const FIRE_KERNEL: Kernel = Kernel::new([
    [0.0, 0.0, 0.0], //
    [0.0, 0.7, 0.0],
    [0.2, 1.0, 0.2],
]);

impl Kernel {
    pub const fn new(weights: [[f32; 3]; 3]) -> Self {
        Self { weights }
    }

    pub const fn weights(&self) -> &[[f32; 3]; 3] {
        &self.weights
    }

    /// Weighted channel sums around `(x, y)` with edge-clamped sampling
    #[allow(clippy::cast_possible_wrap)]
    pub fn convolve<const W: usize, const H: usize>(
        &self,
        grid: &Grid<W, H>,
        x: usize,
        y: usize,
    ) -> [f32; 3] {
        let mut sum = [0.0f32; 3];
        let (x, y) = (x as isize, y as isize);

        for (dy, row) in (-1isize..=1).zip(self.weights.iter()) {
            for (dx, weight) in (-1isize..=1).zip(row.iter()) {
                if *weight == 0.0 {
                    continue;
                }
                let pixel = grid.safe_pixel(x + dx, y + dy);
                sum[0] += f32::from(pixel.r) * weight;
                sum[1] += f32::from(pixel.g) * weight;
                sum[2] += f32::from(pixel.b) * weight;
            }
        }

        sum
    }
}

/// Divide a channel sum and truncate it into the channel range
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn settle(sum: f32, divider: f32) -> u8 {
    (sum / divider).clamp(0.0, 255.0) as u8
}

/// Compute the next frame from `front` into `working`
///
/// Pure function of the inputs: every cell of `working` is overwritten and
/// `front` is left untouched.
pub fn diffuse<const W: usize, const H: usize>(
    front: &Grid<W, H>,
    working: &mut Grid<W, H>,
    kernel: &Kernel,
    divider: f32,
) {
    for x in 0..W {
        for y in 0..H {
            let [r, g, b] = kernel.convolve(front, x, y);
            working.set(
                x,
                y,
                Rgb {
                    r: settle(r, divider),
                    g: settle(g, divider),
                    b: settle(b, divider),
                },
            );
        }
    }
}

/// Diffuse `front` through `working` and copy the result back
pub fn advance<const W: usize, const H: usize>(
    front: &mut Grid<W, H>,
    working: &mut Grid<W, H>,
    kernel: &Kernel,
    divider: f32,
) {
    diffuse(front, working, kernel, divider);
    front.copy_from(working);
}
