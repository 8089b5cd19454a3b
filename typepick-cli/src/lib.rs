//! typepick - command-line host for the content type selector field.
//!
//! The binary wires `typepick-config` settings and a YAML item registry into
//! `typepick-fields`. Command handlers live in `commands` and return their
//! output as a string so they can be exercised without a process.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, OutputFormat};
