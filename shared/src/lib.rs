/*!
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The grid is a torus: its left edge touches its right edge and its top edge
* touches its bottom edge, so every cell has exactly eight neighbors.
*/

pub mod grid;
pub mod life;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod torus;

pub use grid::{CellState, Grid, GridError};
pub use patterns::{Pattern, PatternKind, UnknownPattern};
