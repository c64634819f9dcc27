use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Black,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Black => Some(Player::Black),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

/// A `rows` x `columns` grid with a cursor per column tracking the next free
/// row. Created once per game at its configured dimensions; never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Column-major: `cells[column * rows + row]`, row 0 at the top.
    cells: Vec<Cell>,
    /// Next free row per column, -1 once the column is full.
    cursors: Vec<isize>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
            cursors: vec![rows as isize - 1; columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column * self.rows + row]
    }

    /// Next free row in `column`, or -1 when the column is full.
    pub fn cursor(&self, column: usize) -> isize {
        self.cursors[column]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.columns {
            return true;
        }
        self.cursors[column] < 0
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cursors.iter().all(|&cursor| cursor < 0)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, cell: Cell) -> Result<usize, DropError> {
        if column >= self.columns {
            return Err(DropError::InvalidColumn);
        }

        let cursor = self.cursors[column];
        if cursor < 0 {
            return Err(DropError::ColumnFull);
        }

        let row = cursor as usize;
        self.cells[column * self.rows + row] = cell;
        self.cursors[column] = cursor - 1;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7);
        for column in 0..7 {
            for row in 0..6 {
                assert_eq!(board.get(column, row), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new(6, 7);

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(3, 5), Cell::Red);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Black).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(3, 4), Cell::Black);
    }

    #[test]
    fn test_cursor_tracks_drops() {
        let mut board = Board::new(6, 7);
        assert_eq!(board.cursor(2), 5);

        board.drop_piece(2, Cell::Red).unwrap();
        assert_eq!(board.cursor(2), 4);

        board.drop_piece(2, Cell::Black).unwrap();
        assert_eq!(board.cursor(2), 3);

        // Other columns untouched
        assert_eq!(board.cursor(0), 5);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(6, 7);

        // Fill column 0
        for _ in 0..6 {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.cursor(0), -1);
        assert_eq!(
            board.drop_piece(0, Cell::Black),
            Err(DropError::ColumnFull)
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(6, 7);
        assert_eq!(board.drop_piece(7, Cell::Red), Err(DropError::InvalidColumn));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(6, 7);
        for column in 0..7 {
            for _ in 0..6 {
                board.drop_piece(column, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_runtime_dimensions() {
        let mut board = Board::new(4, 9);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.columns(), 9);

        let row = board.drop_piece(8, Cell::Black).unwrap();
        assert_eq!(row, 3);
        assert_eq!(board.drop_piece(9, Cell::Red), Err(DropError::InvalidColumn));

        for _ in 0..3 {
            board.drop_piece(8, Cell::Red).unwrap();
        }
        assert!(board.is_column_full(8));
    }
}
