//! Property-based tests for route normalization and resolution.

use proptest::prelude::*;

use super::matching::{is_route_match, normalize_path};
use super::normalize::{join_route, normalize_tree};
use super::resolver::resolve;
use crate::node::{find_node, preorder, Node};
use crate::test_util::{current_path_strategy, raw_tree_strategy};

fn assert_children_extend_parent(nodes: &[Node]) -> Result<(), TestCaseError> {
    for node in nodes {
        let parent = node.route.as_deref().unwrap_or_default();
        for child in &node.children {
            let child_route = child.route.as_deref().unwrap_or_default();
            prop_assert!(
                child_route.starts_with(parent),
                "{} does not extend {}",
                child_route,
                parent
            );
        }
        assert_children_extend_parent(&node.children)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every surviving node carries an absolute route without a doubled root.
    #[test]
    fn normalized_routes_are_absolute(raw in raw_tree_strategy()) {
        let tree = normalize_tree(&raw);
        for node in preorder(&tree) {
            let route = node.route.as_deref().unwrap_or_default();
            prop_assert!(route.starts_with('/'));
            prop_assert!(!route.starts_with("//"));
        }
    }

    // Re-rooting any normalized route leaves it unchanged.
    #[test]
    fn normalized_routes_rejoin_from_root(raw in raw_tree_strategy()) {
        let tree = normalize_tree(&raw);
        for node in preorder(&tree) {
            let route = node.route.as_deref().unwrap_or_default();
            prop_assert_eq!(join_route("", Some(route)), route);
        }
    }

    // A child's absolute route always extends its parent's.
    #[test]
    fn child_routes_extend_parent(raw in raw_tree_strategy()) {
        let tree = normalize_tree(&raw);
        assert_children_extend_parent(&tree)?;
    }

    // Normalization never invents nodes.
    #[test]
    fn normalization_only_prunes(raw in raw_tree_strategy()) {
        let tree = normalize_tree(&raw);
        prop_assert!(preorder(&tree).count() <= preorder(&raw).count());
        for node in preorder(&tree) {
            prop_assert!(find_node(&raw, &node.id).is_some());
        }
    }

    // The resolved leaf matches and no matching leaf is more specific.
    #[test]
    fn resolution_is_longest_match(raw in raw_tree_strategy(), path in current_path_strategy()) {
        let tree = normalize_tree(&raw);
        let resolution = resolve(&tree, &path);

        let route_len = |n: &Node| normalize_path(n.route.as_deref().unwrap_or_default()).chars().count();
        let matching: Vec<&Node> = preorder(&tree)
            .filter(|n| n.is_leaf())
            .filter(|n| is_route_match(n.route.as_deref().unwrap_or_default(), &path))
            .collect();

        match &resolution.active_id {
            None => {
                prop_assert!(matching.is_empty());
                prop_assert!(resolution.ancestor_folder_ids.is_empty());
            }
            Some(active) => {
                let winner = find_node(&tree, active).unwrap();
                prop_assert!(winner.is_leaf());
                let best = matching.iter().copied().map(route_len).max().unwrap();
                prop_assert_eq!(route_len(winner), best);
                let first_best = matching.iter().copied().find(|n| route_len(*n) == best).unwrap();
                prop_assert_eq!(&first_best.id, active);
            }
        }
    }

    // Suggested ancestors are folders that actually contain the active leaf.
    #[test]
    fn resolution_ancestors_contain_active(raw in raw_tree_strategy(), path in current_path_strategy()) {
        let tree = normalize_tree(&raw);
        let resolution = resolve(&tree, &path);
        if let Some(active) = &resolution.active_id {
            for folder_id in &resolution.ancestor_folder_ids {
                let folder = find_node(&tree, folder_id).unwrap();
                prop_assert!(folder.is_folder());
                prop_assert!(folder.iter().any(|n| &n.id == active));
            }
        }
    }
}
