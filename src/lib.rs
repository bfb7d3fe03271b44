//! Grid games for two local players
//!
//! Two fixed variants share one engine:
//! - Tic-tac-toe: 3x3 board, three in a row wins
//! - Connect five: 5x5 board, five in a row wins
//!
//! # Architecture
//!
//! - [`board`]: Marks, variants and the square board
//! - [`rules`]: Win detection and game outcome
//! - [`game`]: The game state holder that applies moves
//! - [`config`]: Command-line options
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gridgame::{Game, GameStatus, Mark, Variant};
//!
//! let mut game = Game::new(Variant::Classic);
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index).unwrap();
//! }
//!
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! assert_eq!(game.highlighted(), &[0, 1, 2]);
//! assert!(game.apply_move(8).is_err());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, Variant};
pub use error::{BoardError, MoveError};
pub use game::Game;
pub use rules::{evaluate, GameStatus, Orientation, WinningLine};
