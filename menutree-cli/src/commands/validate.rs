//! Command to validate a menu file.

use crate::error::CliError;
use crate::utils::{load_configuration, menu_repository, GlobalOptions};
use clap::Args;
use menutree::route::normalize_tree;
use menutree::{preorder, FileMenuRepository, MenuRepository};
use std::path::PathBuf;

/// Validate a menu file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Menu file to validate (defaults to the configured menu file)
    #[arg(value_name = "MENU_FILE")]
    pub menu_file: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let repository = match self.menu_file {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::InvalidArguments(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
                FileMenuRepository::new(path)
            }
            None => menu_repository(&load_configuration(global)?)?,
        };

        let raw = match repository.fetch_menus() {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Validation error: {e}");
                return Err(CliError::SemanticFailure(
                    "Menu file is invalid".to_string(),
                ));
            }
        };

        let tree = normalize_tree(&raw);
        let total = preorder(&raw).count();
        let kept = preorder(&tree).count();
        let leaves = preorder(&tree).filter(|n| n.is_leaf()).count();

        println!(
            "Menu file is valid: {kept} nodes ({} folders, {leaves} leaves)",
            kept - leaves
        );
        if kept < total && !global.quiet {
            eprintln!(
                "Warning: {} nodes have no resolvable route and are hidden",
                total - kept
            );
        }
        Ok(())
    }
}
