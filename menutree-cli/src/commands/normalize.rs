//! Command to print the normalized menu tree.

use crate::error::CliError;
use crate::utils::{load_configuration, menu_repository, parse_format, resolve_format, GlobalOptions};
use clap::Args;
use menutree::output::{create_formatter, TreeView};
use menutree::route::normalize_tree;
use menutree::{MenuRepository, OutputFormat};

/// Print the normalized menu tree.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Output format (human or json)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let raw = menu_repository(&config)?.fetch_menus()?;
        let tree = normalize_tree(&raw);

        let formatter = create_formatter(resolve_format(self.format, &config));
        println!("{}", formatter.format_tree(&TreeView::new(&tree))?);
        Ok(())
    }
}
