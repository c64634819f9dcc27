//! Win detection: a bottom-up, left-to-right scan of the grid probing four
//! axes (vertical, horizontal, both diagonals) from each cell, with skip
//! flags so cells known not to contribute are never rescanned.

use super::board::{Board, Cell};
use super::player::Player;

/// Result of a single directional run-walk.
enum Walk {
    /// Found `win_condition` consecutive same-color cells.
    Win(Player),
    /// Hit an empty cell before the run completed.
    Empty { column: usize },
    /// Hit the opposite color before the run completed.
    Blocked { column: usize },
}

/// Scan the board for a `win_condition`-in-a-row of either color.
///
/// `pieces_placed` is the number of non-empty cells. Returns the winning
/// color of the first run found in scan order (bottom row to top, left to
/// right, vertical before horizontal before the diagonals), or `None`.
pub(crate) fn scan_for_win(
    board: &Board,
    win_condition: usize,
    pieces_placed: u32,
) -> Option<Player> {
    // A run of N same-color pieces implies at least 2N-1 pieces on the board
    // under alternating play. Piece-count lower bound, so purely a fast path.
    if (pieces_placed as usize) < win_condition * 2 - 1 {
        return None;
    }

    let rows = board.rows();
    let columns = board.columns();
    let win = win_condition;

    // Columns holding fewer than `win` pieces cannot contain a vertical run.
    let mut vertical_bypass: Vec<bool> = (0..columns)
        .map(|column| rows as isize - board.cursor(column) <= win as isize)
        .collect();

    // Last row a run can start from with enough room above it, and the
    // column bounds for the rightward and leftward directions. A board
    // narrower than the win length has no horizontal starting column at all.
    let vertical_bound = win - 1;
    let horizontal_bound = columns.checked_sub(win);
    let backward_bound = win - 1;

    for row in (0..rows).rev() {
        // Columns whose cell in this row is known empty; no run can start
        // there, so the column is skipped for the rest of this row.
        let mut ignore_column = vec![false; columns];
        // Watermark: horizontal probes left of this already failed this row.
        let mut next_horizontal = 0;

        for column in 0..columns {
            if ignore_column[column] {
                continue;
            }

            if !vertical_bypass[column] && row >= vertical_bound {
                match walk(board, row, column, -1, 0, win) {
                    Walk::Win(player) => return Some(player),
                    // Everything above an empty cell is empty, so verticals
                    // through this column stay dead for the rest of the scan.
                    Walk::Empty { column: empty } => vertical_bypass[empty] = true,
                    Walk::Blocked { .. } => {}
                }
            }

            if let Some(bound) = horizontal_bound {
                if column <= bound && column >= next_horizontal {
                    match walk(board, row, column, 0, 1, win) {
                        Walk::Win(player) => return Some(player),
                        Walk::Empty { column: empty } => {
                            ignore_column[empty] = true;
                            vertical_bypass[empty] = true;
                            next_horizontal = empty;
                        }
                        Walk::Blocked { column: blocked } => next_horizontal = blocked,
                    }
                }
            }

            if row >= vertical_bound {
                if horizontal_bound.is_some_and(|bound| column <= bound) {
                    match walk(board, row, column, -1, 1, win) {
                        Walk::Win(player) => return Some(player),
                        Walk::Empty { column: empty } => vertical_bypass[empty] = true,
                        Walk::Blocked { .. } => {}
                    }
                }

                if column >= backward_bound {
                    match walk(board, row, column, -1, -1, win) {
                        Walk::Win(player) => return Some(player),
                        Walk::Empty { column: empty } => vertical_bypass[empty] = true,
                        Walk::Blocked { .. } => {}
                    }
                }
            }
        }
    }

    None
}

/// Walk `win` cells from `(row, column)` in the direction
/// `(row_delta, column_delta)`. The first cell establishes the color; every
/// further cell must match it exactly. The caller guarantees all `win` cells
/// are in bounds.
fn walk(
    board: &Board,
    row: usize,
    column: usize,
    row_delta: isize,
    column_delta: isize,
    win: usize,
) -> Walk {
    let color = board.get(column, row);
    let Some(player) = color.player() else {
        return Walk::Empty { column };
    };

    let mut r = row as isize;
    let mut c = column as isize;
    for _ in 1..win {
        r += row_delta;
        c += column_delta;
        match board.get(c as usize, r as usize) {
            Cell::Empty => return Walk::Empty { column: c as usize },
            cell if cell == color => {}
            _ => return Walk::Blocked { column: c as usize },
        }
    }

    Walk::Win(player)
}
