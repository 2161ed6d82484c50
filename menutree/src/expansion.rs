//! Expanded-folder bookkeeping for tree views.
//!
//! The expansion set belongs to the caller. Route resolution only ever adds
//! to it, so folders the user opened by hand stay open when the navigation
//! path changes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::node::{Node, NodeId};
use crate::route::Resolution;

/// Set of folder ids currently shown expanded.
///
/// # Examples
///
/// ```
/// use menutree::{ExpansionSet, NodeId};
/// use menutree::route::Resolution;
///
/// let mut expanded = ExpansionSet::new();
/// expanded.toggle(&NodeId::from("reports"));
///
/// let resolution = Resolution {
///     active_id: Some(NodeId::from("roles")),
///     ancestor_folder_ids: vec![NodeId::from("admin"), NodeId::from("access")],
/// };
/// expanded.reveal(&resolution);
///
/// assert!(expanded.is_expanded(&NodeId::from("reports")));
/// assert!(expanded.is_expanded(&NodeId::from("access")));
/// assert_eq!(expanded.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionSet {
    ids: BTreeSet<NodeId>,
}

impl ExpansionSet {
    /// Creates an empty expansion set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.ids.contains(id)
    }

    /// Number of expanded folders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates expanded ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.ids.iter()
    }

    /// Union `ids` into the set. Returns how many were newly added.
    pub fn merge<'a>(&mut self, ids: impl IntoIterator<Item = &'a NodeId>) -> usize {
        let before = self.ids.len();
        self.ids.extend(ids.into_iter().cloned());
        self.ids.len() - before
    }

    /// Expand every folder containing the resolved leaf.
    ///
    /// A resolution without a match adds nothing.
    pub fn reveal(&mut self, resolution: &Resolution) -> usize {
        self.merge(&resolution.ancestor_folder_ids)
    }

    /// Flip a single folder. Returns the new expanded flag.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Collapse a single folder.
    pub fn collapse(&mut self, id: &NodeId) {
        self.ids.remove(id);
    }

    /// Drop ids that no longer name a folder in `tree`.
    ///
    /// Used after the tree has been re-fetched.
    pub fn retain_folders(&mut self, tree: &[Node]) {
        let folders: BTreeSet<&NodeId> = crate::node::preorder(tree)
            .filter(|n| n.is_folder())
            .map(|n| &n.id)
            .collect();
        self.ids.retain(|id| folders.contains(id));
    }
}

impl FromIterator<NodeId> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
