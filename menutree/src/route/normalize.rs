//! Route normalization for raw menu trees.
//!
//! A raw tree carries route fragments relative to the parent node. This module
//! rewrites every node's route into an absolute path built from its
//! ancestors, and prunes nodes whose route cannot be resolved.

use crate::node::Node;

/// Join a relative route fragment onto an absolute parent path.
///
/// - No fragment (or an empty one): the parent path is returned unchanged.
/// - Otherwise the fragment gets exactly one leading `/` and is appended to
///   the parent path. A root parent (`""` or `"/"`) contributes nothing, so
///   the result never starts with `//`.
///
/// # Examples
///
/// ```
/// use menutree::route::normalize::join_route;
///
/// assert_eq!(join_route("/system", Some("users")), "/system/users");
/// assert_eq!(join_route("/system", Some("//users")), "/system/users");
/// assert_eq!(join_route("/", Some("users")), "/users");
/// assert_eq!(join_route("", Some("/users")), "/users");
/// assert_eq!(join_route("/system", None), "/system");
/// assert_eq!(join_route("", None), "");
/// ```
#[must_use]
pub fn join_route(parent_path: &str, fragment: Option<&str>) -> String {
    let Some(fragment) = fragment.filter(|f| !f.is_empty()) else {
        return parent_path.to_string();
    };

    let fragment = fragment.trim_start_matches('/');
    if parent_path.is_empty() || parent_path == "/" {
        format!("/{fragment}")
    } else {
        format!("{parent_path}/{fragment}")
    }
}

/// Normalize a forest of nodes beneath `parent_path`.
///
/// Every surviving node's `route` becomes its absolute path, and children are
/// normalized recursively beneath that path. A node whose resolved route is
/// empty is dropped together with its whole subtree. Sibling order is kept.
///
/// Presentation metadata (`key`, `name`, `sort_order`, `is_visible`) is
/// copied through untouched.
///
/// # Examples
///
/// ```
/// use menutree::Node;
/// use menutree::route::normalize::normalize;
///
/// let raw = vec![Node::folder("system", Some("system")).with_children(vec![
///     Node::leaf("users", Some("users")),
///     Node::leaf("roles", Some("/roles")),
/// ])];
///
/// let tree = normalize(&raw, "");
/// assert_eq!(tree[0].route.as_deref(), Some("/system"));
/// assert_eq!(tree[0].children[0].route.as_deref(), Some("/system/users"));
/// assert_eq!(tree[0].children[1].route.as_deref(), Some("/system/roles"));
/// ```
#[must_use]
pub fn normalize(nodes: &[Node], parent_path: &str) -> Vec<Node> {
    nodes
        .iter()
        .filter_map(|node| normalize_node(node, parent_path))
        .collect()
}

/// Normalize a top-level forest (parent path `""`).
#[must_use]
pub fn normalize_tree(nodes: &[Node]) -> Vec<Node> {
    normalize(nodes, "")
}

fn normalize_node(node: &Node, parent_path: &str) -> Option<Node> {
    let route = join_route(parent_path, node.route());
    if route.is_empty() {
        log::debug!("pruning menu node {} with unresolvable route", node.id);
        return None;
    }

    let children = normalize(&node.children, &route);
    Some(Node {
        id: node.id.clone(),
        key: node.key.clone(),
        name: node.name.clone(),
        kind: node.kind,
        route: Some(route),
        sort_order: node.sort_order,
        is_visible: node.is_visible,
        children,
    })
}
