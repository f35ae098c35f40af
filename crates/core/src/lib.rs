//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 board engine: the grid, the move/merge rules,
//! the tile spawn policy, and the game-over check.
//! It has **no dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, plus property tests in `tests/`
//! - **Portable**: Can run in any front end (full-screen terminal, line console, headless)
//! - **Fast**: Fixed-size arrays, no allocation on the move path
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with row/column line extraction and adjacency scan
//! - [`line`]: compact-and-merge transform for a single line
//! - [`game_state`]: the engine (`Game`): initialise, spawn, move, game over
//! - [`rng`]: seeded random source for spawn position and value
//! - [`snapshot`]: read-only view handed to renderers
//! - [`error`]: engine error kinds
//!
//! # Game Rules
//!
//! - **Start**: two tiles, each 2 or 4 with equal probability
//! - **Move**: each row (Left/Right) or column (Up/Down) is compacted toward the
//!   move direction; equal neighbours merge once per move
//! - **Spawn**: after every move that changed the board, one new tile appears in
//!   a uniformly chosen empty cell
//! - **Game over**: no empty cell and no equal horizontal or vertical neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Game;
//! use tui_2048_types::Direction;
//!
//! // Create a game; it starts with two tiles
//! let mut game = Game::new(12345);
//! assert_eq!(game.board().tile_count(), 2);
//!
//! // Apply moves until one changes the board
//! let changed = Direction::ALL
//!     .iter()
//!     .any(|d| game.apply_move(*d).map(|o| o.changed()).unwrap_or(false));
//! assert!(changed);
//! assert_eq!(game.moves(), 1);
//!
//! // Invalid raw codes are rejected
//! assert!(game.apply_move_code(9).is_err());
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Line, LINE_LEN};
pub use error::EngineError;
pub use game_state::{Game, MoveOutcome, Spawn};
pub use line::{compact_and_merge, slide_line, LineShift};
pub use rng::TileRng;
pub use snapshot::GameSnapshot;
