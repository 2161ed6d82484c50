//! Library exports for menutree-cli.
//!
//! This module exports the CLI structure for use in tests and documentation
//! tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
