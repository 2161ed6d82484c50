//! Shared fixtures and proptest strategies for unit tests.

use proptest::prelude::*;

use crate::node::{Node, NodeId};

/// Raw example tree: `system/{users, roles}`.
pub fn system_fixture() -> Vec<Node> {
    vec![Node::folder("system", Some("system")).with_children(vec![
        Node::leaf("users", Some("/users")),
        Node::leaf("roles", Some("/roles")),
    ])]
}

/// Raw tree with two top-level folders, a nested folder and a root leaf.
pub fn console_fixture() -> Vec<Node> {
    vec![
        Node::leaf("dashboard", Some("/")),
        Node::folder("admin", Some("admin")).with_children(vec![
            Node::leaf("admin-home", Some("/")),
            Node::folder("access", None).with_children(vec![
                Node::leaf("roles", Some("roles")),
                Node::leaf("users", Some("users")),
                Node::leaf("menus", Some("menus")),
            ]),
            Node::folder("empty", Some("empty")),
        ]),
        Node::folder("reports", Some("reports")).with_children(vec![
            Node::leaf("daily", Some("daily")),
            Node::leaf("monthly", Some("monthly")),
        ]),
    ]
}

/// Collect a list of string ids.
pub fn ids(list: &[&str]) -> Vec<NodeId> {
    list.iter().map(|s| NodeId::from(*s)).collect()
}

fn relabel(nodes: &mut [Node], next: &mut usize) {
    for node in nodes {
        node.id = NodeId::new(format!("n{next}"));
        *next += 1;
        relabel(&mut node.children, next);
    }
}

fn fragment_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.85, "/?[a-c]{1,2}")
}

/// Random raw forests with unique ids and a small route alphabet, so that
/// prefix collisions between routes are common.
pub fn raw_tree_strategy() -> impl Strategy<Value = Vec<Node>> {
    let leaf = fragment_strategy().prop_map(|route| Node::leaf("_", route.as_deref()));
    let node = leaf.prop_recursive(3, 32, 4, |inner| {
        (fragment_strategy(), prop::collection::vec(inner, 0..4)).prop_map(|(route, children)| {
            Node::folder("_", route.as_deref()).with_children(children)
        })
    });

    prop::collection::vec(node, 1..4).prop_map(|mut nodes| {
        relabel(&mut nodes, &mut 0);
        nodes
    })
}

/// Navigation paths over the same alphabet as [`raw_tree_strategy`].
pub fn current_path_strategy() -> impl Strategy<Value = String> {
    ("(/[a-c]{1,2}){0,4}", prop::option::of("[?#][a-z=]{0,4}"), "/?").prop_map(
        |(path, suffix, trailing)| {
            let path = if path.is_empty() { "/".to_string() } else { path };
            format!("{path}{trailing}{}", suffix.unwrap_or_default())
        },
    )
}
