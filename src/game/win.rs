//! Four-in-a-row detection.
//!
//! [`has_win`] scans every starting cell in every direction and serves as the
//! reference answer. [`has_win_through`] only looks at the lines through one
//! cell; since any new run must contain the piece just placed, the game uses
//! it after each drop.

use super::{Cell, Grid, PlayerId};

/// Length of a winning run.
pub const RUN_LENGTH: isize = 4;

/// Direction vectors as `(d_row, d_col)`: horizontal, vertical,
/// diagonal down-right, diagonal down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Whether `player` has four aligned pieces anywhere on the grid.
pub fn has_win(grid: &Grid, player: PlayerId) -> bool {
    let owned = Cell::Occupied(player);
    for y in 0..grid.height() as isize {
        for x in 0..grid.width() as isize {
            for &(dy, dx) in &DIRECTIONS {
                let run_is_win =
                    (0..RUN_LENGTH).all(|i| grid.cell(y + i * dy, x + i * dx) == Some(owned));
                if run_is_win {
                    return true;
                }
            }
        }
    }
    false
}

/// Whether the piece at `(row, col)` is part of a run of four.
///
/// Returns false for an empty cell or one outside the grid.
pub fn has_win_through(grid: &Grid, row: usize, col: usize) -> bool {
    let (row, col) = (row as isize, col as isize);
    let cell = match grid.cell(row, col) {
        Some(cell @ Cell::Occupied(_)) => cell,
        _ => return false,
    };

    DIRECTIONS.iter().any(|&(dy, dx)| {
        // Count the current piece, then walk both ways along the line
        let count = 1
            + count_from(grid, row, col, dy, dx, cell)
            + count_from(grid, row, col, -dy, -dx, cell);
        count >= RUN_LENGTH
    })
}

fn count_from(grid: &Grid, row: isize, col: isize, dy: isize, dx: isize, cell: Cell) -> isize {
    let mut count = 0;
    let (mut r, mut c) = (row + dy, col + dx);
    while grid.cell(r, c) == Some(cell) {
        count += 1;
        r += dy;
        c += dx;
    }
    count
}
