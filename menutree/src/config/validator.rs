//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::path::Path;

/// Longest accepted role name.
pub const MAX_ROLE_LEN: usize = 128;

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use menutree::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref role) = config.default_role {
            Self::validate_role("default_role", role)?;
        }

        if let Some(ref path) = config.menu_file {
            Self::validate_path("menu_file", path)?;
        }

        if let Some(ref path) = config.assignments_file {
            Self::validate_path("assignments_file", path)?;
        }

        Ok(())
    }

    /// Validate a role name used as an assignment key.
    ///
    /// # Errors
    ///
    /// Returns an error if the role is blank, too long, or contains a NUL.
    pub fn validate_role(field: &str, role: &str) -> Result<()> {
        if role.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Role cannot be empty".into(),
            });
        }

        if role.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Role cannot contain null bytes".into(),
            });
        }

        if role.chars().count() > MAX_ROLE_LEN {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Role cannot exceed {MAX_ROLE_LEN} characters"),
            });
        }

        Ok(())
    }

    fn validate_path(field: &str, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Path cannot be empty".into(),
            });
        }
        Ok(())
    }
}
