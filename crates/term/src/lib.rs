//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout frameworks and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Read engine state only through snapshots
//! - Allow precise control over tile size and spacing (8x3 tiles, 2x1 gaps by default)
//!
//! The line-oriented console front end uses [`text::dump_grid`] instead.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Palette, Viewport, GAME_OVER_TEXT, HELP_TEXT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::{dump_grid, format_grid};
