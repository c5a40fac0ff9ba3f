//! Panther Cloud Air CLI library.
//!
//! Terminal styling and output rendering for the `panther-cli` binary. The
//! binary itself only parses arguments and dispatches to command handlers.

pub mod output;
pub mod terminal;
