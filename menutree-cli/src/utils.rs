//! Utility functions for CLI operations.
//!
//! Configuration loading, collaborator construction and role/format
//! resolution shared by the commands.

use crate::error::CliError;
use menutree::config::{default_data_dir, ConfigValidator};
use menutree::{Config, ConfigBuilder, FileAssignmentStore, FileMenuRepository, OutputFormat};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the menu file location.
    pub menu_file: Option<PathBuf>,

    /// Override the assignments file location.
    pub assignments_file: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        menu_file: global.menu_file.clone(),
        assignments_file: global.assignments_file.clone(),
        ..Default::default()
    };

    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The menu repository named by configuration.
pub fn menu_repository(config: &Config) -> Result<FileMenuRepository, CliError> {
    let path = config.menu_file.clone().ok_or_else(|| {
        CliError::Config(
            "no menu file configured (use --menu-file, MENUTREE_MENU_FILE or menu_file in menutree.yaml)"
                .to_string(),
        )
    })?;
    log::debug!("menu file: {}", path.display());
    Ok(FileMenuRepository::new(path))
}

/// The assignment store named by configuration, or
/// `~/.menutree/assignments.json`.
pub fn assignment_store(config: &Config) -> Result<FileAssignmentStore, CliError> {
    let path = match config.assignments_file {
        Some(ref path) => path.clone(),
        None => default_data_dir()
            .map_err(|e| CliError::Config(e.to_string()))?
            .join("assignments.json"),
    };
    log::debug!("assignments file: {}", path.display());
    Ok(FileAssignmentStore::new(path))
}

/// The role given on the command line, or the configured default.
pub fn resolve_role(role: Option<&str>, config: &Config) -> Result<String, CliError> {
    let role = role.unwrap_or_else(|| config.role());
    ConfigValidator::validate_role("role", role)
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
    Ok(role.to_string())
}

/// The format given on the command line, or the configured default.
pub fn resolve_format(format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    format.unwrap_or_else(|| config.format())
}

/// clap value parser for `--format`.
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(s).ok_or_else(|| format!("invalid format '{s}' (expected human or json)"))
}
