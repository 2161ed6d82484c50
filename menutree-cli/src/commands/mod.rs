//! CLI command implementations.
//!
//! - `normalize`: Print the normalized menu tree
//! - `resolve`: Resolve the active menu for a navigation path
//! - `show`: Print the tree with a role's tri-state selection
//! - `toggle`: Toggle nodes in a role's assignment
//! - `validate`: Check a menu file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod normalize;
pub mod resolve;
pub mod show;
pub mod toggle;
pub mod validate;

pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use resolve::ResolveCommand;
pub use show::ShowCommand;
pub use toggle::ToggleCommand;
pub use validate::ValidateCommand;
