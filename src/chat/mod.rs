//! Interactive chat mode.
//!
//! A REPL that forwards free text to the current model and handles a small
//! set of built-in commands (`exit`, `models`, `setmodel`, `testmodel`, `help`).

/// Built-in command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, Flow, SessionConfig};
pub(crate) use ui::print_models;
