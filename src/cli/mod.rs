//! Command-line interface module.
//!
//! Provides argument parsing and the one-shot (non-interactive) commands.

pub mod args;
pub mod commands;
