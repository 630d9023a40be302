use crate::grid::CellState::{Alive, Dead};
use thiserror::Error;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },
    #[error("cell ({col}, {row}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
    #[error("could not allocate storage for {cells} cells")]
    AllocationFailure { cells: usize },
}

/// Fixed-size grid of cells stored row-major in one contiguous buffer.
///
/// The dimensions never change after creation. Storage is released when the
/// grid is dropped or passed to [`Grid::destroy`]; both consume the grid, so
/// it cannot be touched afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Allocates a `cols` x `rows` grid with every cell dead.
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        let len = cols
            .checked_mul(rows)
            .ok_or(GridError::AllocationFailure { cells: usize::MAX })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::AllocationFailure { cells: len })?;
        cells.resize(len, Dead);

        log::trace!("allocated {cols}x{rows} grid");
        Ok(Grid { cols, rows, cells })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row-major view of every cell; `(col, row)` lives at `row * cols + col`.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    pub fn fill(&mut self, value: CellState) {
        self.cells.fill(value);
    }

    pub fn get(&self, col: usize, row: usize) -> Result<CellState, GridError> {
        let index = self.index(col, row)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, col: usize, row: usize, value: CellState) -> Result<(), GridError> {
        let index = self.index(col, row)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates `(col, row)` of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index % cols, index / cols))
    }

    /// Releases the grid's storage.
    pub fn destroy(self) {
        log::trace!("released {}x{} grid", self.cols, self.rows);
    }

    /// Swaps in the buffer of another grid with the same dimensions.
    pub(crate) fn replace_cells(&mut self, next: Grid) {
        debug_assert_eq!((self.cols, self.rows), (next.cols, next.rows));
        self.cells = next.cells;
    }

    fn index(&self, col: usize, row: usize) -> Result<usize, GridError> {
        if col >= self.cols || row >= self.rows {
            return Err(GridError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(row * self.cols + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_extent_is_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::InvalidDimensions { cols: 0, rows: 4 })
        );
        assert_eq!(
            Grid::new(4, 0),
            Err(GridError::InvalidDimensions { cols: 4, rows: 0 })
        );
    }

    #[test]
    fn oversized_grid_reports_allocation_failure() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(GridError::AllocationFailure { .. })
        ));
    }

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(5, 3).unwrap();
        assert_eq!(grid.cells().len(), 15);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn storage_is_row_major() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(3, 1, Alive).unwrap();
        assert_eq!(grid.cells()[7], Alive);
        assert_eq!(grid.get(3, 1), Ok(Alive));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(3, 1)]);
    }

    #[test]
    fn raw_access_checks_bounds() {
        let mut grid = Grid::new(4, 3).unwrap();
        let err = GridError::OutOfBounds {
            col: 4,
            row: 0,
            cols: 4,
            rows: 3,
        };
        assert_eq!(grid.get(4, 0), Err(err.clone()));
        assert_eq!(grid.set(4, 0, Alive), Err(err));
        assert!(grid.get(0, 3).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn fill_sets_every_cell() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.fill(Alive);
        assert_eq!(grid.population(), 6);
        grid.fill(Dead);
        assert_eq!(grid.population(), 0);
    }
}
