//! Command to toggle nodes in a role's assignment.

use crate::error::CliError;
use crate::utils::{
    assignment_store, load_configuration, menu_repository, resolve_role, GlobalOptions,
};
use clap::Args;
use menutree::{MenuSession, NodeId};

/// Toggle menu nodes for a role and save the result.
#[derive(Args)]
pub struct ToggleCommand {
    /// Node ids to toggle, applied in order
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Role to edit (defaults to the configured role)
    #[arg(long)]
    pub role: Option<String>,

    /// Show the result without saving it
    #[arg(long)]
    pub dry_run: bool,
}

impl ToggleCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let role = resolve_role(self.role.as_deref(), &config)?;
        let repository = menu_repository(&config)?;
        let store = assignment_store(&config)?;

        let mut session = MenuSession::load(&repository, &store, &role)?;
        for id in self.ids {
            let id = NodeId::from(id);
            let state = session.toggle(&id)?;
            println!("{id}: {state}");
        }

        if self.dry_run {
            if !global.quiet {
                eprintln!("Dry run: assignment for role '{role}' not saved");
            }
            return Ok(());
        }

        if session.is_dirty() {
            session.save(&store)?;
        }
        if !global.quiet {
            eprintln!(
                "Saved {} menu ids for role '{role}'",
                session.selected().len()
            );
        }
        Ok(())
    }
}
