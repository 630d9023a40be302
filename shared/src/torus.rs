//! Wrap-around addressing. Coordinates that fall off one edge of the grid
//! re-enter at the opposite edge.

use crate::grid::{CellState, Grid, GridError};

/// Maps any integer coordinate onto `[0, extent)`.
///
/// Equivalent to adding `extent` for as long as the coordinate is `<= 0` and
/// then reducing modulo `extent`, computed without the loop.
///
/// # Panics
///
/// Panics if `extent` is zero. Grids never have a zero extent.
pub fn normalize(coord: isize, extent: usize) -> usize {
    assert!(extent > 0, "extent must be positive");
    let coord = coord as i128;
    let extent = extent as i128;

    let lifted = if coord <= 0 {
        coord + extent * (-coord / extent + 1)
    } else {
        coord
    };
    (lifted % extent) as usize
}

impl Grid {
    /// Reads the cell at `(c, r)`, wrapping both axes.
    pub fn get_cell_state(&self, c: isize, r: isize) -> Result<CellState, GridError> {
        self.get(normalize(c, self.cols()), normalize(r, self.rows()))
    }

    /// Writes the cell at `(c, r)`, wrapping both axes.
    pub fn set_cell_state(&mut self, c: isize, r: isize, value: CellState) -> Result<(), GridError> {
        let (col, row) = (normalize(c, self.cols()), normalize(r, self.rows()));
        self.set(col, row, value)
    }
}
