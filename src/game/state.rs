use super::board::{Board, DropError};
use super::player::Player;
use super::scan::scan_for_win;
use super::LegalColumns;
use crate::config::GameConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    /// The board is full and nobody won.
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("the game is already over")]
    GameOver,
}

/// The complete state of one game session. Mutated exclusively through
/// [`GameState::apply_move`] / [`GameState::apply_move_mut`]; replaced
/// wholesale on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    /// Moves played so far, plus one. `move_number - 1` always equals the
    /// number of non-empty cells on the board.
    move_number: u32,
    outcome: Option<GameOutcome>,
    win_condition: usize,
}

impl GameState {
    /// Create a fresh game from a configuration, failing fast on a board
    /// that could never be played or won.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GameState {
            board: Board::new(config.rows, config.columns),
            current_player: Player::Red, // Red starts
            move_number: 1,
            outcome: None,
            win_condition: config.win_condition,
        })
    }

    /// Fresh game with the same dimensions and win condition; the prior
    /// state is discarded entirely.
    pub fn reset(&self) -> GameState {
        GameState {
            board: Board::new(self.board.rows(), self.board.columns()),
            current_player: Player::Red,
            move_number: 1,
            outcome: None,
            win_condition: self.win_condition,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn win_condition(&self) -> usize {
        self.win_condition
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full); empty once the game is over
    pub fn legal_columns(&self) -> LegalColumns {
        if self.is_terminal() {
            return LegalColumns::new();
        }

        (0..self.board.columns())
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency). Atomic: on error the state
    /// is unchanged.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                DropError::ColumnFull => MoveError::ColumnFull,
                DropError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        // move_number starts at 1, so before the increment it equals the
        // number of pieces now on the board.
        let pieces_placed = self.move_number;
        self.move_number += 1;

        if let Some(winner) = scan_for_win(&self.board, self.win_condition, pieces_placed) {
            self.outcome = Some(GameOutcome::Winner(winner));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Stalemate);
        } else {
            // The player only advances while the game continues.
            self.current_player = self.current_player.other();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    fn new_game() -> GameState {
        GameState::new(&GameConfig::default()).unwrap()
    }

    /// 42 drops that fill the default board with no four-in-a-row for
    /// either color. Columns are filled in complementary pairs, column 6
    /// strictly alternating.
    fn drawn_sequence() -> Vec<usize> {
        let pair = |a: usize, b: usize| vec![a, b, a, b, b, a, b, a, a, b, a, b];
        let mut moves = Vec::new();
        moves.extend(pair(0, 1));
        moves.extend([6, 6]);
        moves.extend(pair(2, 3));
        moves.extend([6, 6]);
        moves.extend(pair(4, 5));
        moves.extend([6, 6]);
        moves
    }

    #[test]
    fn test_initial_state() {
        let state = new_game();
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.move_number(), 1);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_apply_move_is_copy_on_write() {
        let state = new_game();
        let next = state.apply_move(3).unwrap();

        assert_eq!(next.current_player(), Player::Black);
        assert_eq!(next.board().get(3, 5), Cell::Red);
        // The original state is untouched.
        assert_eq!(state.board().get(3, 5), Cell::Empty);
        assert_eq!(state.current_player(), Player::Red);
    }

    #[test]
    fn test_players_alternate() {
        let mut state = new_game();
        for (i, column) in [0, 1, 2, 0, 1, 2].iter().enumerate() {
            let expected = if i % 2 == 0 { Player::Red } else { Player::Black };
            assert_eq!(state.current_player(), expected);
            state.apply_move_mut(*column).unwrap();
        }
    }

    #[test]
    fn test_move_number_counts_pieces() {
        let mut state = new_game();
        for (i, column) in [3, 3, 4, 2, 5].iter().enumerate() {
            state.apply_move_mut(*column).unwrap();
            assert_eq!(state.move_number(), i as u32 + 2);
        }
    }

    #[test]
    fn test_column_overflow() {
        let mut state = new_game();
        for _ in 0..6 {
            state.apply_move_mut(0).unwrap();
        }

        let before = state.clone();
        assert_eq!(state.apply_move_mut(0), Err(MoveError::ColumnFull));
        // No mutation on failure, and the other columns stay legal.
        assert_eq!(state, before);
        assert_eq!(state.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_range_column() {
        let mut state = new_game();
        assert_eq!(state.apply_move_mut(7), Err(MoveError::InvalidColumn));
        assert_eq!(state.move_number(), 1);
    }

    #[test]
    fn test_vertical_win_on_fourth_drop() {
        let mut state = new_game();
        // Red stacks column 0; Black answers elsewhere.
        for column in [0, 1, 0, 2, 0, 3] {
            state.apply_move_mut(column).unwrap();
            assert!(!state.is_terminal());
        }

        state.apply_move_mut(0).unwrap();
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        // No alternation on the winning move.
        assert_eq!(state.current_player(), Player::Red);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_horizontal_win_on_fourth_column() {
        let mut state = new_game();
        // Red fills the bottom row left to right, Black stacks on top.
        for column in [0, 0, 1, 1, 2, 2] {
            state.apply_move_mut(column).unwrap();
            assert!(!state.is_terminal());
        }

        state.apply_move_mut(3).unwrap();
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_diagonal_win() {
        let mut state = new_game();
        // Red builds a rising staircase at (5,0), (4,1), (3,2) over mixed
        // supports, then completes it at (2,3).
        for column in [3, 1, 0, 2, 5, 2, 1, 3, 2, 3] {
            state.apply_move_mut(column).unwrap();
            assert!(!state.is_terminal());
        }

        state.apply_move_mut(3).unwrap();
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut state = new_game();
        for column in [0, 1, 0, 2, 0, 3, 0] {
            state.apply_move_mut(column).unwrap();
        }
        assert!(state.is_terminal());

        let terminal = state.clone();
        assert_eq!(state.apply_move_mut(4), Err(MoveError::GameOver));
        assert_eq!(state, terminal);
    }

    #[test]
    fn test_stalemate_on_full_board() {
        let mut state = new_game();
        let moves = drawn_sequence();
        for (i, &column) in moves.iter().enumerate() {
            state
                .apply_move_mut(column)
                .unwrap_or_else(|e| panic!("move {i} in column {column}: {e}"));
            if i < moves.len() - 1 {
                assert!(!state.is_terminal(), "premature end at move {i}");
            }
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Stalemate));
        assert!(state.legal_columns().is_empty());
        // The last mover was Black; no alternation on the terminal move.
        assert_eq!(state.current_player(), Player::Black);
    }

    #[test]
    fn test_stalemate_on_tiny_board() {
        let config = GameConfig {
            rows: 1,
            columns: 2,
            win_condition: 2,
        };
        let mut state = GameState::new(&config).unwrap();
        state.apply_move_mut(0).unwrap();
        state.apply_move_mut(1).unwrap();
        assert_eq!(state.outcome(), Some(GameOutcome::Stalemate));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = new_game();
        for column in [0, 1, 0, 2, 0, 3, 0] {
            state.apply_move_mut(column).unwrap();
        }
        assert!(state.is_terminal());

        let fresh = state.reset();
        assert_eq!(fresh.outcome(), None);
        assert_eq!(fresh.current_player(), Player::Red);
        assert_eq!(fresh.move_number(), 1);
        assert_eq!(fresh.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(fresh.board().get(0, 5), Cell::Empty);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut state = new_game();
        state.apply_move_mut(3).unwrap();

        assert_eq!(state.legal_columns(), state.legal_columns());
        assert_eq!(state.outcome(), state.outcome());
    }

    #[test]
    fn test_five_in_a_row_on_larger_board() {
        let config = GameConfig {
            rows: 9,
            columns: 9,
            win_condition: 5,
        };
        let mut state = GameState::new(&config).unwrap();

        // Red claims the bottom row, Black stacks above; four in a row is
        // not a win here.
        for column in [0, 0, 1, 1, 2, 2, 3, 3] {
            state.apply_move_mut(column).unwrap();
            assert!(!state.is_terminal());
        }

        state.apply_move_mut(4).unwrap();
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let bad = GameConfig {
            rows: 0,
            columns: 7,
            win_condition: 4,
        };
        assert!(GameState::new(&bad).is_err());

        let unwinnable = GameConfig {
            rows: 3,
            columns: 3,
            win_condition: 4,
        };
        assert!(GameState::new(&unwinnable).is_err());
    }
}
