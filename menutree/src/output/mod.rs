//! Output formatting for menu trees and route resolutions.
//!
//! Formatters turn a [`TreeView`] (a normalized tree plus whatever state
//! should be shown with it) into text for a terminal or into JSON.

mod formatters;

use std::collections::BTreeMap;

use crate::config::OutputFormat;
use crate::expansion::ExpansionSet;
use crate::node::{Node, NodeId};
use crate::route::Resolution;
use crate::selection::SelectionState;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// A tree together with the state to render alongside it.
///
/// Every piece of state is optional. Without states no checkbox markers are
/// drawn; without an expansion set every folder is shown open.
#[derive(Debug, Clone, Copy)]
pub struct TreeView<'a> {
    /// Normalized tree.
    pub tree: &'a [Node],
    /// Per-node selection state.
    pub states: Option<&'a BTreeMap<NodeId, SelectionState>>,
    /// Expanded folders.
    pub expanded: Option<&'a ExpansionSet>,
    /// The active leaf.
    pub active_id: Option<&'a NodeId>,
}

impl<'a> TreeView<'a> {
    /// A bare view of `tree`.
    #[must_use]
    pub fn new(tree: &'a [Node]) -> Self {
        Self {
            tree,
            states: None,
            expanded: None,
            active_id: None,
        }
    }

    /// Show selection markers.
    #[must_use]
    pub fn with_states(mut self, states: &'a BTreeMap<NodeId, SelectionState>) -> Self {
        self.states = Some(states);
        self
    }

    /// Collapse folders not in `expanded`.
    #[must_use]
    pub fn with_expansion(mut self, expanded: &'a ExpansionSet) -> Self {
        self.expanded = Some(expanded);
        self
    }

    /// Highlight the active leaf.
    #[must_use]
    pub fn with_active(mut self, active_id: Option<&'a NodeId>) -> Self {
        self.active_id = active_id;
        self
    }

    fn state_of(&self, id: &NodeId) -> Option<SelectionState> {
        self.states.and_then(|s| s.get(id).copied())
    }

    fn is_open(&self, node: &Node) -> bool {
        self.expanded.map_or(true, |e| e.is_expanded(&node.id))
    }

    fn is_active(&self, node: &Node) -> bool {
        self.active_id == Some(&node.id)
    }
}

/// Formats trees and resolutions.
pub trait TreeFormatter {
    /// Render a tree view.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_tree(&self, view: &TreeView<'_>) -> Result<String>;

    /// Render a resolution and the expansion set it produced.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_resolution(&self, resolution: &Resolution, expanded: &ExpansionSet)
        -> Result<String>;
}

/// Create the formatter for an output format.
#[must_use]
pub fn create_formatter(format: OutputFormat) -> Box<dyn TreeFormatter> {
    match format {
        OutputFormat::Human => Box::new(HumanFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
