//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, session controller, terminal rendering).
//!
//! # Board Dimensions
//!
//! The 2048 playfield is a fixed square:
//!
//! - **Width**: 4 columns (indexed 0-3, left to right)
//! - **Height**: 4 rows (indexed 0-3, top to bottom)
//! - **Initial tiles**: 2, placed on an empty board
//!
//! # Spawn Policy
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_VALUES` | `[2, 4]` | Values a new tile may take |
//! | `FOUR_TILE_PROBABILITY` | 0.5 | Chance that a new tile is a 4 |
//! | `INITIAL_TILES` | 2 | Tiles spawned by a fresh game |
//!
//! # Tile Layout (terminal cells)
//!
//! The board is drawn as a 4x4 array of tiles separated by gaps, the terminal
//! analogue of 100px blocks with 20px spacing:
//!
//! | Constant | Value |
//! |----------|-------|
//! | `TILE_W` | 8 |
//! | `TILE_H` | 3 |
//! | `TILE_GAP_X` | 2 |
//! | `TILE_GAP_Y` | 1 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Command, Direction, Toward, BOARD_SIZE};
//!
//! // Raw codes follow 0=Up, 1=Down, 2=Left, 3=Right
//! assert_eq!(Direction::from_code(2), Some(Direction::Left));
//! assert_eq!(Direction::from_code(4), None);
//!
//! // Up and Left pack tiles toward the start of each line
//! assert_eq!(Direction::Up.toward(), Toward::Start);
//! assert_eq!(Direction::Right.toward(), Toward::End);
//!
//! let cmd = Command::Move(Direction::Down);
//! assert_eq!(cmd.direction(), Some(Direction::Down));
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Board width and height in cells (4x4)
pub const BOARD_SIZE: u8 = 4;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of tiles spawned when a game is initialised
pub const INITIAL_TILES: usize = 2;

/// Values a freshly spawned tile may take
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Probability that a spawned tile is a 4 rather than a 2.
///
/// Uniform choice between the two spawn values.
pub const FOUR_TILE_PROBABILITY: f64 = 0.5;

/// Tile width in terminal columns
pub const TILE_W: u16 = 8;

/// Tile height in terminal rows
pub const TILE_H: u16 = 3;

/// Horizontal gap between tiles (and around the outer edge)
pub const TILE_GAP_X: u16 = 2;

/// Vertical gap between tiles (and around the outer edge)
pub const TILE_GAP_Y: u16 = 1;

/// Window title shown by the terminal front end
pub const WINDOW_TITLE: &str = "2048 Game";

/// The four slide directions
///
/// Raw integer codes (console input) follow the convention
/// `0 = Up`, `1 = Down`, `2 = Left`, `3 = Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which end of a line tiles are packed toward
///
/// A line is always read in board order (top-to-bottom for columns,
/// left-to-right for rows); `Start` is its first element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toward {
    Start,
    End,
}

impl Direction {
    /// All directions in code order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert a raw integer code into a direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_code(0), Some(Direction::Up));
    /// assert_eq!(Direction::from_code(3), Some(Direction::Right));
    /// assert_eq!(Direction::from_code(-1), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for Up/Down, which operate on columns
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// End of each line that tiles are packed toward
    pub fn toward(&self) -> Toward {
        match self {
            Direction::Up | Direction::Left => Toward::Start,
            Direction::Down | Direction::Right => Toward::End,
        }
    }
}

/// Commands accepted by the session controller
///
/// These come from either key mapping (terminal UI) or parsed console tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Throw away the current game and start a fresh one
    Restart,
    /// End the session without touching the board
    Quit,
}

impl Command {
    /// Direction carried by a move command
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Move(direction) => Some(*direction),
            _ => None,
        }
    }
}
