//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use menutree::config::{Config, ConfigMerger};
///
/// let low = Config { default_role: Some("low".to_string()), ..Default::default() };
/// let high = Config { default_role: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_role, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!("merging configuration from {}", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target. Every field that is set in `source`
    /// replaces the one in `target`.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.menu_file.is_some() {
            target.menu_file.clone_from(&source.menu_file);
        }

        if source.assignments_file.is_some() {
            target.assignments_file.clone_from(&source.assignments_file);
        }

        if source.default_role.is_some() {
            target.default_role.clone_from(&source.default_role);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
