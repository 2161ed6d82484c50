//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::{ConfigValidator, MAX_ROLE_LEN};
use proptest::prelude::*;
use std::path::PathBuf;

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Human), Just(OutputFormat::Json)]
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z/]{1,20}\\.json"),
        prop::option::of("[a-z/]{1,20}\\.json"),
        prop::option::of("[a-z]{1,20}"),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(menu, assignments, role, format)| Config {
            menu_file: menu.map(PathBuf::from),
            assignments_file: assignments.map(PathBuf::from),
            default_role: role,
            output_format: format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Fields set in the higher source win; unset fields fall through.
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.menu_file, high.menu_file.or(low.menu_file));
        prop_assert_eq!(merged.assignments_file, high.assignments_file.or(low.assignments_file));
        prop_assert_eq!(merged.default_role, high.default_role.or(low.default_role));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging an empty config changes nothing.
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging is idempotent.
    #[test]
    fn config_merge_idempotent(low in config_strategy(), high in config_strategy()) {
        let mut once = low;
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }

    // Generated configs survive a YAML round trip and validate.
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert!(ConfigValidator::validate(&parsed).is_ok());
        prop_assert_eq!(parsed, config);
    }

    // Role validation never panics and rejects overlong names.
    #[test]
    fn role_validation_total(role in "\\PC{0,200}") {
        let result = ConfigValidator::validate_role("role", &role);
        if role.chars().count() > MAX_ROLE_LEN || role.trim().is_empty() {
            prop_assert!(result.is_err());
        }
    }
}
