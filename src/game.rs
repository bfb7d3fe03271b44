//! Game state holder
//!
//! Owns the board, the player to move and the winning line, and is the only
//! place moves are applied. The winning line and the status are derived
//! from the board after each accepted move.

use tracing::{debug, info, instrument};

use crate::board::{Board, Mark, Variant};
use crate::error::MoveError;
use crate::rules::{self, GameStatus, WinningLine};

/// A two-player game on one device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    variant: Variant,
    board: Board,
    next: Mark,
    winning_line: Option<WinningLine>,
}

impl Game {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            board: Board::for_variant(variant),
            next: Mark::X,
            winning_line: None,
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark placed by the next accepted move
    #[inline]
    pub fn next_player(&self) -> Mark {
        self.next
    }

    #[inline]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Cells to highlight; empty until someone wins
    pub fn highlighted(&self) -> &[usize] {
        self.winning_line
            .as_ref()
            .map(WinningLine::cells)
            .unwrap_or_default()
    }

    pub fn status(&self) -> GameStatus {
        rules::outcome(&self.board, self.winning_line.as_ref())
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Number of marks on the board
    #[inline]
    pub fn move_count(&self) -> usize {
        self.board.filled_count()
    }

    /// Place the next player's mark at `index`
    ///
    /// Rejected moves leave the game untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is off the board.
    #[instrument(skip(self), fields(variant = %self.variant, player = %self.next))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        assert!(
            index < self.board.len(),
            "cell {index} is off a board of {} cells",
            self.board.len()
        );

        if self.is_finished() {
            debug!("move rejected, game is over");
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty_at(index) {
            debug!("move rejected, cell occupied");
            return Err(MoveError::Occupied { index });
        }

        self.board = self.board.with_mark(index, self.next);
        self.next = self.next.opponent();
        self.winning_line = rules::check_winner(&self.board, self.variant.run_length());

        let status = self.status();
        debug!(?status, "move applied");
        match status {
            GameStatus::Won(mark) => info!(%mark, cells = ?self.highlighted(), "game won"),
            GameStatus::Draw => info!("game drawn"),
            GameStatus::InProgress => {}
        }
        Ok(status)
    }

    /// Clear the board; X moves first
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn reset(&mut self) {
        *self = Self::new(self.variant);
        debug!("board reset");
    }

    /// Start over with a (possibly different) variant
    #[instrument(skip(self))]
    pub fn new_game(&mut self, variant: Variant) {
        *self = Self::new(variant);
        info!("new game");
    }

    /// Check whether the player to move would win by playing `index`
    pub fn would_win(&self, index: usize) -> bool {
        !self.is_finished()
            && rules::would_win(&self.board, index, self.next, self.variant.run_length())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, moves: &[usize]) {
        for &index in moves {
            game.apply_move(index).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(Variant::ConnectFive);
        assert_eq!(game.board().len(), 25);
        assert!(game.board().is_blank());
        assert_eq!(game.next_player(), Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.highlighted().is_empty());
    }

    #[test]
    fn test_move_flips_turn() {
        let mut game = Game::default();
        assert_eq!(game.apply_move(4), Ok(GameStatus::InProgress));
        assert_eq!(game.board().get(4), Mark::X);
        assert_eq!(game.next_player(), Mark::O);
        game.apply_move(0).unwrap();
        assert_eq!(game.board().get(0), Mark::O);
        assert_eq!(game.next_player(), Mark::X);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::default();
        game.apply_move(4).unwrap();
        let before = game.clone();
        assert_eq!(game.apply_move(4), Err(MoveError::Occupied { index: 4 }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_top_row_win() {
        let mut game = Game::new(Variant::Classic);
        play(&mut game, &[0, 3, 1, 4]);
        assert_eq!(game.apply_move(2), Ok(GameStatus::Won(Mark::X)));
        assert_eq!(game.highlighted(), &[0, 1, 2]);
        assert!(game.is_finished());
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::new(Variant::Classic);
        play(&mut game, &[0, 3, 1, 4, 2]);
        let before = game.clone();
        assert_eq!(game.apply_move(8), Err(MoveError::GameOver));
        assert_eq!(game, before);
        assert!(!game.would_win(5));
    }

    #[test]
    fn test_draw() {
        let mut game = Game::new(Variant::Classic);
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.winning_line().is_none());
        assert_eq!(game.apply_move(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_connect_five_column() {
        let mut game = Game::new(Variant::ConnectFive);
        play(&mut game, &[0, 1, 5, 2, 10, 3, 15, 6]);
        assert!(game.would_win(20));
        assert_eq!(game.apply_move(20), Ok(GameStatus::Won(Mark::X)));
        assert_eq!(game.highlighted(), &[0, 5, 10, 15, 20]);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(Variant::ConnectFive);
        play(&mut game, &[12, 7]);
        game.reset();
        assert_eq!(game, Game::new(Variant::ConnectFive));
    }

    #[test]
    fn test_new_game_switches_variant() {
        let mut game = Game::new(Variant::Classic);
        play(&mut game, &[0, 1]);
        game.new_game(Variant::ConnectFive);
        assert_eq!(game.variant(), Variant::ConnectFive);
        assert_eq!(game.board().len(), 25);
        assert!(game.board().is_blank());
    }

    #[test]
    #[should_panic(expected = "off a board")]
    fn test_out_of_range_panics() {
        Game::new(Variant::Classic).apply_move(9).unwrap();
    }
}
