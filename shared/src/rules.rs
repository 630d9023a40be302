use crate::grid::CellState::{self, Alive, Dead};
use crate::grid::{Grid, GridError};

/// Offsets of the eight cells surrounding a cell.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies the B3/S23 rule to a single cell.
pub fn next_state(current: CellState, live_neighbors: usize) -> CellState {
    match (current, live_neighbors) {
        (Alive, 2..=3) => Alive, // Survives
        (Dead, 3) => Alive,      // Becomes alive
        _ => Dead,               // Dies or remains dead
    }
}

/// Count the number of alive neighbors for a cell, wrapping around the edges.
///
/// On grids narrower than three cells an offset can land on the same cell as
/// another offset (or on the cell itself); each offset is still counted.
pub fn count_live_neighbors(grid: &Grid, c: isize, r: isize) -> Result<usize, GridError> {
    let mut count = 0;
    for (dc, dr) in NEIGHBOR_OFFSETS {
        if grid.get_cell_state(c + dc, r + dr)? == Alive {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_rules() {
        let expected = [Dead, Dead, Alive, Alive, Dead, Dead, Dead, Dead, Dead];
        for (count, want) in expected.into_iter().enumerate() {
            assert_eq!(next_state(Alive, count), want, "alive with {count} neighbors");
        }
    }

    #[test]
    fn dead_cell_rules() {
        for count in 0..=8 {
            let want = if count == 3 { Alive } else { Dead };
            assert_eq!(next_state(Dead, count), want, "dead with {count} neighbors");
        }
    }

    #[test]
    fn counts_only_the_eight_neighbors() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.fill(Alive);
        assert_eq!(count_live_neighbors(&grid, 2, 2), Ok(8));

        grid.set(2, 2, Dead).unwrap();
        assert_eq!(count_live_neighbors(&grid, 2, 2), Ok(8));
        grid.set(1, 1, Dead).unwrap();
        assert_eq!(count_live_neighbors(&grid, 2, 2), Ok(7));
    }

    #[test]
    fn counts_across_edges() {
        let mut grid = Grid::new(5, 4).unwrap();
        grid.set(4, 3, Alive).unwrap();
        grid.set(0, 3, Alive).unwrap();
        grid.set(4, 0, Alive).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(3));
        assert_eq!(count_live_neighbors(&grid, 2, 2), Ok(0));
    }

    #[test]
    fn tiny_grids_count_every_offset() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, Alive).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(8));
    }
}
