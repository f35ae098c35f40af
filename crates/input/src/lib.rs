//! Input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`]s for the full-screen
//! front end, and parses typed console lines for the prompt front end.

pub mod console;
pub mod map;

pub use tui_2048_types as types;

pub use console::{parse_line, ConsoleInput, InputError};
pub use map::{handle_key_event, should_quit};
