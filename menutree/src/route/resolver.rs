//! Active route resolution.
//!
//! Given a normalized tree and the current navigation path, find the single
//! most specific leaf whose route matches and the folders that must be
//! expanded to reveal it.

use serde::Serialize;

use crate::node::{Node, NodeId};
use crate::route::matching::{is_route_match, normalize_path};

/// Outcome of resolving a navigation path against a tree.
///
/// `ancestor_folder_ids` is ordered from the outermost folder inward. It is a
/// suggestion to be unioned into the caller's expansion set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// The matching leaf, if any.
    pub active_id: Option<NodeId>,
    /// Folder ids on the path from the root down to the active leaf.
    pub ancestor_folder_ids: Vec<NodeId>,
}

impl Resolution {
    /// Returns true when a leaf matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.active_id.is_some()
    }
}

/// Resolve the active leaf for `current_path`.
///
/// Only leaves are eligible. Among matching leaves the one with the longest
/// normalized route wins; on a tie the first leaf in depth-first pre-order is
/// kept.
///
/// # Examples
///
/// ```
/// use menutree::{Node, NodeId};
/// use menutree::route::{normalize_tree, resolve};
///
/// let tree = normalize_tree(&[Node::folder("system", Some("system")).with_children(vec![
///     Node::leaf("users", Some("users")),
///     Node::leaf("roles", Some("roles")),
/// ])]);
///
/// let resolution = resolve(&tree, "/system/roles/9");
/// assert_eq!(resolution.active_id, Some(NodeId::from("roles")));
/// assert_eq!(resolution.ancestor_folder_ids, vec![NodeId::from("system")]);
/// ```
#[must_use]
pub fn resolve(tree: &[Node], current_path: &str) -> Resolution {
    let mut walk = Walk {
        current_path,
        ancestors: Vec::new(),
        best_len: None,
        result: Resolution::default(),
    };
    walk.visit_all(tree);

    if walk.result.active_id.is_none() {
        log::debug!("no menu leaf matches {current_path}");
    }
    walk.result
}

struct Walk<'t, 'p> {
    current_path: &'p str,
    ancestors: Vec<&'t NodeId>,
    best_len: Option<usize>,
    result: Resolution,
}

impl<'t> Walk<'t, '_> {
    fn visit_all(&mut self, nodes: &'t [Node]) {
        for node in nodes {
            self.visit(node);
        }
    }

    fn visit(&mut self, node: &'t Node) {
        if node.is_leaf() {
            self.consider(node);
        }

        if node.children.is_empty() {
            return;
        }

        let pushed = node.is_folder();
        if pushed {
            self.ancestors.push(&node.id);
        }
        self.visit_all(&node.children);
        if pushed {
            self.ancestors.pop();
        }
    }

    fn consider(&mut self, leaf: &Node) {
        let Some(route) = leaf.route() else {
            return;
        };
        if !is_route_match(route, self.current_path) {
            return;
        }

        let len = normalize_path(route).chars().count();
        if self.best_len.is_some_and(|best| len <= best) {
            return;
        }

        self.best_len = Some(len);
        self.result = Resolution {
            active_id: Some(leaf.id.clone()),
            ancestor_folder_ids: self.ancestors.iter().map(|id| (*id).clone()).collect(),
        };
    }
}
