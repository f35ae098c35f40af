//! Session engine: drives the board engine one command at a time.
//!
//! Front ends (full-screen terminal, line console) translate their input into
//! [`types::Command`]s and hand them to a [`Session`]. The session applies the
//! command, decides whether the game just ended, and reports a [`Step`] so the
//! front end knows whether to redraw, re-prompt, or announce the end.

pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use session::{Session, Step};
