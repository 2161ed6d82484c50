//! Command to print the tree with a role's tri-state selection.

use crate::error::CliError;
use crate::utils::{
    assignment_store, load_configuration, menu_repository, parse_format, resolve_format,
    resolve_role, GlobalOptions,
};
use clap::Args;
use menutree::output::{create_formatter, TreeView};
use menutree::{MenuSession, OutputFormat};

/// Show the menu tree with each node's selection state for a role.
#[derive(Args)]
pub struct ShowCommand {
    /// Role whose assignment is shown (defaults to the configured role)
    #[arg(long)]
    pub role: Option<String>,

    /// Mark the menu matching this navigation path as active
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Output format (human or json)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let role = resolve_role(self.role.as_deref(), &config)?;
        let repository = menu_repository(&config)?;
        let store = assignment_store(&config)?;

        let mut session = MenuSession::load(&repository, &store, &role)?;
        if let Some(ref path) = self.path {
            session.navigate(path);
        }

        let states = session.states();
        let view = TreeView::new(session.tree())
            .with_states(&states)
            .with_active(session.active_id());

        let formatter = create_formatter(resolve_format(self.format, &config));
        println!("{}", formatter.format_tree(&view)?);
        Ok(())
    }
}
