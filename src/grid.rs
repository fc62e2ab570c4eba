//! Fixed-size color grid addressed by (column, row)
//!
//! Row 0 is the top of the lamp, row `H - 1` the bottom where embers are
//! injected. The grid never allocates: cells live in a `[[Rgb; H]; W]` array.

use crate::color::{BLACK, Rgb};

/// Two-dimensional color buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const W: usize, const H: usize> {
    cells: [[Rgb; H]; W],
}

impl<const W: usize, const H: usize> Default for Grid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Grid<W, H> {
    /// Create a grid with every cell dark
    pub const fn new() -> Self {
        Self {
            cells: [[BLACK; H]; W],
        }
    }

    /// Get the color of a cell
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.cells[x][y]
    }

    /// Overwrite the color of a cell
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.cells[x][y] = color;
    }

    /// Clamp signed coordinates to the nearest cell inside the grid
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn clamp_coords(x: isize, y: isize) -> (usize, usize) {
        let max_x = W.saturating_sub(1) as isize;
        let max_y = H.saturating_sub(1) as isize;
        (x.clamp(0, max_x) as usize, y.clamp(0, max_y) as usize)
    }

    /// Sample a cell with edge clamping
    ///
    /// Out-of-range coordinates resolve to the nearest edge cell, so
    /// neighbour lookups never wrap and never read padding.
    #[inline]
    pub fn safe_pixel(&self, x: isize, y: isize) -> Rgb {
        let (x, y) = Self::clamp_coords(x, y);
        self.cells[x][y]
    }

    /// Reset every cell to black
    pub fn clear(&mut self) {
        self.cells = [[BLACK; H]; W];
    }

    /// Copy all cells from another grid of the same shape
    pub fn copy_from(&mut self, other: &Self) {
        self.cells = other.cells;
    }

    /// Returns true if every cell is black
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell == BLACK)
    }

    /// Iterate over all cells as `(x, y, color)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, color)| (x, y, *color))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_coords_stays_inside_at_corners() {
        for x in -1..=5isize {
            for y in -1..=16isize {
                let (cx, cy) = Grid::<5, 16>::clamp_coords(x, y);
                assert!(cx < 5);
                assert!(cy < 16);
            }
        }
        assert_eq!(Grid::<5, 16>::clamp_coords(-1, -1), (0, 0));
        assert_eq!(Grid::<5, 16>::clamp_coords(5, 16), (4, 15));
    }
}
