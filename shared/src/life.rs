use crate::grid::{CellState, Grid, GridError};
use crate::rules::{count_live_neighbors, next_state};
use rand::Rng;

impl Grid {
    /// Advance the grid by one step (Game of Life logic).
    ///
    /// Every next state is computed from the current generation into a second
    /// buffer, which replaces the current one only once the whole pass has
    /// succeeded. On error the grid is left untouched. Returns `true` if the
    /// new generation differs from the old one.
    pub fn advance(&mut self) -> Result<bool, GridError> {
        let mut next_grid = Grid::new(self.cols(), self.rows())?;

        for row in 0..self.rows() as isize {
            for col in 0..self.cols() as isize {
                let current = self.get_cell_state(col, row)?;
                let alive_neighbors = count_live_neighbors(self, col, row)?;
                next_grid.set_cell_state(col, row, next_state(current, alive_neighbors))?;
            }
        }

        if self.cells() == next_grid.cells() {
            log::trace!("generation unchanged");
            return Ok(false);
        }
        self.replace_cells(next_grid);
        Ok(true)
    }

    /// Re-rolls every cell: alive with probability `density`, otherwise dead.
    pub fn randomize(&mut self, density: f64) {
        let mut rng = rand::rng();
        self.randomize_with(&mut rng, density);
    }

    /// Same as [`Grid::randomize`] with a caller-supplied generator, so a
    /// seeded soup can be reproduced.
    ///
    /// # Panics
    ///
    /// Panics if `density` is outside `[0, 1]`.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R, density: f64) {
        for cell in self.cells_mut() {
            *cell = CellState::from(rng.random_bool(density));
        }
        log::debug!(
            "randomized {}x{} grid at density {density}: {} live cells",
            self.cols(),
            self.rows(),
            self.population()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::CellState::{Alive, Dead};
    use crate::grid::Grid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid_with(cols: usize, rows: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(cols, rows).unwrap();
        for &(col, row) in cells {
            grid.set(col, row, Alive).unwrap();
        }
        grid
    }

    fn live(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = grid.live_cells().collect();
        cells.sort();
        cells
    }

    #[test]
    fn isolated_cell_dies() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(grid.advance(), Ok(true));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn empty_grid_is_unchanged() {
        let mut grid = Grid::new(6, 4).unwrap();
        assert_eq!(grid.advance(), Ok(false));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let vertical = [(2, 1), (2, 2), (2, 3)];
        let mut grid = grid_with(5, 5, &horizontal);

        assert_eq!(grid.advance(), Ok(true));
        assert_eq!(live(&grid), vertical);
        assert_eq!(grid.advance(), Ok(true));
        assert_eq!(live(&grid), horizontal);
    }

    #[test]
    fn three_cells_fill_then_empty_the_smallest_torus() {
        // On a 3x3 torus every cell neighbors all eight others.
        let mut grid = grid_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);

        assert_eq!(grid.advance(), Ok(true));
        assert_eq!(grid.population(), 9);
        assert_eq!(grid.advance(), Ok(true));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn block_is_stable() {
        let block = [(0, 0), (0, 1), (1, 0), (1, 1)];
        let mut grid = grid_with(6, 6, &block);
        for _ in 0..5 {
            assert_eq!(grid.advance(), Ok(false));
            assert_eq!(live(&grid), block);
        }
    }

    #[test]
    fn update_is_simultaneous() {
        // A single-buffer sweep would see row 1 already updated while counting row 2.
        let mut grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        grid.advance().unwrap();
        assert_eq!(live(&grid), [(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn glider_wraps_back_to_start() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut grid = grid_with(8, 8, &glider);
        // A glider moves one cell diagonally every four generations.
        for _ in 0..4 * 8 {
            grid.advance().unwrap();
        }
        assert_eq!(live(&grid), {
            let mut cells = glider.to_vec();
            cells.sort();
            cells
        });
    }

    #[test]
    fn seeded_randomize_is_reproducible() {
        let mut a = Grid::new(20, 10).unwrap();
        let mut b = Grid::new(20, 10).unwrap();
        a.randomize_with(&mut StdRng::seed_from_u64(7), 0.3);
        b.randomize_with(&mut StdRng::seed_from_u64(7), 0.3);
        assert_eq!(a, b);
    }

    #[test]
    fn randomize_density_extremes() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.randomize(1.0);
        assert_eq!(grid.population(), 64);
        grid.randomize(0.0);
        assert_eq!(grid.population(), 0);
        assert!(grid.cells().iter().all(|&cell| cell == Dead));
    }
}
