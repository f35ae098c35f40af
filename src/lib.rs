//! TUI 2048 (workspace facade crate).
//!
//! Exposes `tui_2048::{core,engine,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`, plus the logging setup shared by
//! the two binaries.

pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
