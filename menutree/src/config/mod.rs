//! Configuration system for menutree.
//!
//! Configuration tells the tools where the menu forest and role assignments
//! live, which role to use by default, and how to print results.
//!
//! # Configuration Precedence
//!
//! Sources are merged field by field, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`MENUTREE_*`)
//! 3. Private project config (`menutree.local.yaml`)
//! 4. Project config (`menutree.yaml`)
//! 5. User config (`~/.menutree/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use menutree::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("default role: {}", config.role());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, DEFAULT_ROLE};
pub use validator::ConfigValidator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
