//! Command to resolve the active menu for a navigation path.

use crate::error::CliError;
use crate::utils::{load_configuration, menu_repository, parse_format, resolve_format, GlobalOptions};
use clap::Args;
use menutree::output::create_formatter;
use menutree::route::{normalize_tree, resolve};
use menutree::{ExpansionSet, MenuRepository, NodeId, OutputFormat};

/// Resolve the active menu for a navigation path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Navigation path, e.g. /system/users/42?tab=roles
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Folder ids that are already expanded
    #[arg(long = "expanded", value_name = "ID", num_args = 1..)]
    pub expanded: Vec<String>,

    /// Exit with status 1 when no menu matches
    #[arg(long)]
    pub require_match: bool,

    /// Output format (human or json)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let raw = menu_repository(&config)?.fetch_menus()?;
        let tree = normalize_tree(&raw);

        let mut expanded: ExpansionSet = self.expanded.into_iter().map(NodeId::from).collect();
        let resolution = resolve(&tree, &self.path);
        expanded.reveal(&resolution);

        let formatter = create_formatter(resolve_format(self.format, &config));
        println!("{}", formatter.format_resolution(&resolution, &expanded)?);

        if self.require_match && !resolution.is_match() {
            return Err(CliError::SemanticFailure(format!(
                "No menu matches path '{}'",
                self.path
            )));
        }
        Ok(())
    }
}
