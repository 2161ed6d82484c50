//! Tri-state selection over a menu tree.
//!
//! A role's menu assignment is a flat [`SelectionSet`] of node ids. The
//! displayed state of each node is derived from that set on every read and
//! never stored:
//!
//! - a node with descendants shows `All`, `Partial` or `None` according to how
//!   many of its descendants (folders and leaves, every depth) are in the set.
//!   Its own membership is not consulted;
//! - a node without descendants shows `All` exactly when its own id is in the
//!   set.
//!
//! [`toggle`] cascades over a node's whole subtree, including the node's own
//! id, so the set can be persisted as is.
//!
//! # Examples
//!
//! ```
//! use menutree::{Node, NodeId, SelectionSet, SelectionState};
//! use menutree::selection::{selection_state, toggle};
//!
//! let system = Node::folder("system", Some("system")).with_children(vec![
//!     Node::leaf("users", Some("users")),
//!     Node::leaf("roles", Some("roles")),
//! ]);
//!
//! let selected = toggle(&system, &SelectionSet::new());
//! assert_eq!(selected.len(), 3);
//! assert_eq!(selection_state(&system, &selected), SelectionState::All);
//!
//! let selected = toggle(&system.children[0], &selected);
//! assert_eq!(selection_state(&system, &selected), SelectionState::Partial);
//! ```

mod state;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::collections::{BTreeMap, BTreeSet};

use crate::node::{Node, NodeId};

pub use state::SelectionState;

/// The set of node ids assigned to a role.
pub type SelectionSet = BTreeSet<NodeId>;

/// Ids of every node beneath `node`, excluding `node` itself, in pre-order.
pub fn descendant_ids(node: &Node) -> impl Iterator<Item = &NodeId> {
    node.iter().skip(1).map(|n| &n.id)
}

/// Ids of `node` and every node beneath it, in pre-order.
pub fn subtree_ids(node: &Node) -> impl Iterator<Item = &NodeId> {
    node.iter().map(|n| &n.id)
}

/// Compute the displayed selection state of `node`.
///
/// # Examples
///
/// ```
/// use menutree::{Node, NodeId, SelectionSet, SelectionState};
/// use menutree::selection::selection_state;
///
/// let folder = Node::folder("f", None).with_children(vec![Node::leaf("a", Some("a"))]);
///
/// // The folder's own id does not count once it has descendants.
/// let selected: SelectionSet = [NodeId::from("f")].into_iter().collect();
/// assert_eq!(selection_state(&folder, &selected), SelectionState::None);
///
/// // A childless node reflects its own membership.
/// let selected: SelectionSet = [NodeId::from("a")].into_iter().collect();
/// assert_eq!(selection_state(&folder.children[0], &selected), SelectionState::All);
/// ```
#[must_use]
pub fn selection_state(node: &Node, selected: &SelectionSet) -> SelectionState {
    let (hits, total) = descendant_ids(node).fold((0, 0), |(hits, total), id| {
        (hits + usize::from(selected.contains(id)), total + 1)
    });
    SelectionState::from_coverage(hits, total, selected.contains(&node.id))
}

/// Toggle `node` and its whole subtree, returning the new selection.
///
/// A node in state `All` has its subtree removed from the set. Otherwise
/// (`Partial` or `None`) the subtree, including the node's own id, is added.
/// Ids outside the subtree are never touched, and the input set is left
/// unchanged.
#[must_use]
pub fn toggle(node: &Node, selected: &SelectionSet) -> SelectionSet {
    let mut next = selected.clone();
    match selection_state(node, selected) {
        SelectionState::All => {
            for id in subtree_ids(node) {
                next.remove(id);
            }
        }
        SelectionState::Partial | SelectionState::None => {
            next.extend(subtree_ids(node).cloned());
        }
    }
    next
}

/// Compute the displayed state of every node in a forest in one pass.
///
/// The result agrees with calling [`selection_state`] on each node
/// individually.
#[must_use]
pub fn selection_states(
    tree: &[Node],
    selected: &SelectionSet,
) -> BTreeMap<NodeId, SelectionState> {
    let mut states = BTreeMap::new();
    for node in tree {
        collect_states(node, selected, &mut states);
    }
    states
}

/// Returns `(selected, total)` over the subtree rooted at `node`, self
/// included.
fn collect_states(
    node: &Node,
    selected: &SelectionSet,
    states: &mut BTreeMap<NodeId, SelectionState>,
) -> (usize, usize) {
    let (hits, total) = node
        .children
        .iter()
        .map(|child| collect_states(child, selected, states))
        .fold((0, 0), |(h, t), (ch, ct)| (h + ch, t + ct));

    let own = selected.contains(&node.id);
    states.insert(
        node.id.clone(),
        SelectionState::from_coverage(hits, total, own),
    );
    (hits + usize::from(own), total + 1)
}
