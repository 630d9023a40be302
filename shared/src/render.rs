//! Plain-text frames.
//!
//! A frame is a bordered character grid, one line per row plus a border line
//! above and below:
//!
//! ```text
//!  -----
//! |o| |
//! | |o|
//!  -----
//! ```

use crate::grid::Grid;

pub const CHAR_ALIVE: char = 'o';
pub const CHAR_DEAD: char = ' ';
pub const CHAR_V_BORDER: char = '|';
pub const CHAR_H_BORDER: char = '-';
pub const CHAR_CORNER: char = ' ';

/// Number of lines [`frame`] produces for a grid with `rows` rows.
pub fn frame_height(rows: usize) -> usize {
    rows + 2
}

/// Renders the whole grid, `(0, 0)` at the top left.
pub fn frame(grid: &Grid) -> String {
    let width = 2 * grid.cols() + 1;
    let mut out = String::with_capacity((width + 1) * frame_height(grid.rows()));

    push_border(&mut out, grid.cols());
    for row in grid.cells().chunks(grid.cols()) {
        out.push(CHAR_V_BORDER);
        for cell in row {
            out.push(if cell.is_alive() { CHAR_ALIVE } else { CHAR_DEAD });
            out.push(CHAR_V_BORDER);
        }
        out.push('\n');
    }
    push_border(&mut out, grid.cols());
    out
}

/// Generation counter shown above each frame, e.g. `007/900`.
pub fn header(generation: u64, total: u64, width: usize) -> String {
    format!("{generation:0width$}/{total}\n")
}

/// Debug dump: one `0`/`1` per cell followed by a space, one row per line.
/// The terminal front-end logs the seed grid this way at trace level.
pub fn dump(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cells().len() * 2 + grid.rows());
    for row in grid.cells().chunks(grid.cols()) {
        for cell in row {
            out.push(if cell.is_alive() { '1' } else { '0' });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn push_border(out: &mut String, cols: usize) {
    out.push(CHAR_CORNER);
    out.extend(std::iter::repeat(CHAR_H_BORDER).take(2 * cols - 1));
    out.push(CHAR_CORNER);
    out.push('\n');
}
