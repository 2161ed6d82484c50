//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, NormalizeCommand, ResolveCommand, ShowCommand, ToggleCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect menu trees and edit role menu assignments.
#[derive(Parser)]
#[command(name = "menutree")]
#[command(version, about = "Inspect menu trees and edit role menu assignments", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Menu forest file (.json, .yaml or .yml)
    #[arg(long, value_name = "PATH", global = true, env = "MENUTREE_MENU_FILE")]
    pub menu_file: Option<PathBuf>,

    /// Role assignments file (.json)
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        env = "MENUTREE_ASSIGNMENTS_FILE"
    )]
    pub assignments_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized menu tree
    Normalize(NormalizeCommand),

    /// Resolve the active menu for a navigation path
    Resolve(ResolveCommand),

    /// Show the menu tree with a role's selection state
    Show(ShowCommand),

    /// Toggle menu nodes in a role's assignment
    Toggle(ToggleCommand),

    /// Validate a menu file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
