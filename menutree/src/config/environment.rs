//! Environment variable handling for configuration overrides.
//!
//! `MENUTREE_*` variables override values from configuration files.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides `menu_file`.
pub const MENU_FILE_ENV: &str = "MENUTREE_MENU_FILE";
/// Overrides `assignments_file`.
pub const ASSIGNMENTS_FILE_ENV: &str = "MENUTREE_ASSIGNMENTS_FILE";
/// Overrides `default_role`.
pub const DEFAULT_ROLE_ENV: &str = "MENUTREE_DEFAULT_ROLE";
/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "MENUTREE_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use menutree::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `MENUTREE_OUTPUT_FORMAT` names an unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(path) = Self::var(MENU_FILE_ENV) {
            config.menu_file = Some(PathBuf::from(path));
        }

        if let Some(path) = Self::var(ASSIGNMENTS_FILE_ENV) {
            config.assignments_file = Some(PathBuf::from(path));
        }

        if let Some(role) = Self::var(DEFAULT_ROLE_ENV) {
            config.default_role = Some(role);
        }

        if let Some(format) = Self::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(OutputFormat::parse(&format).ok_or_else(|| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message: format!("Invalid output format: '{format}' (expected human/json)"),
                })?);
        }

        Ok(())
    }

    fn var(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.is_empty())
    }
}
