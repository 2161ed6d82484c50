//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration structure.
///
/// Every field is optional so that partial files from several sources can be
/// merged.
///
/// # Examples
///
/// ```
/// use menutree::config::{Config, OutputFormat};
///
/// let config = Config {
///     default_role: Some("auditor".to_string()),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.role(), "auditor");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Menu forest document (JSON or YAML).
    pub menu_file: Option<PathBuf>,

    /// Role assignment document (JSON).
    pub assignments_file: Option<PathBuf>,

    /// Role used when a command does not name one.
    pub default_role: Option<String>,

    /// Output format for commands that print trees.
    pub output_format: Option<OutputFormat>,
}

/// Role used when neither the command line nor configuration names one.
pub const DEFAULT_ROLE: &str = "admin";

impl Config {
    /// The configured default role, or [`DEFAULT_ROLE`].
    #[must_use]
    pub fn role(&self) -> &str {
        self.default_role.as_deref().unwrap_or(DEFAULT_ROLE)
    }

    /// The configured output format, or human-readable.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for tree and resolution output.
///
/// # Examples
///
/// ```
/// use menutree::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!(OutputFormat::parse("HUMAN"), Some(OutputFormat::Human));
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented text tree.
    #[default]
    Human,
    /// JSON document.
    Json,
}

impl OutputFormat {
    /// Parse a format name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}
