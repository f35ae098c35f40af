//! Console prompt parsing.
//!
//! One line per command: an empty line quits, anything else must be an
//! integer direction code. Range checking is left to the engine so that an
//! out-of-range code surfaces as `EngineError::InvalidDirection`.

use thiserror::Error;

/// Prompt shown before each console command
pub const PROMPT: &str = "direction (0: up, 1: down, 2: left, 3: right), empty line to quit: ";

/// A parsed console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Empty line
    Quit,
    /// Raw direction code, not yet range checked
    Code(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("not a direction code: {0:?}")]
    NotANumber(String),
}

/// Parse one console line (trailing newline allowed).
pub fn parse_line(line: &str) -> Result<ConsoleInput, InputError> {
    let token = line.trim();
    if token.is_empty() {
        return Ok(ConsoleInput::Quit);
    }
    token
        .parse::<i64>()
        .map(ConsoleInput::Code)
        .map_err(|_| InputError::NotANumber(token.to_string()))
}
