//! Property-based tests for tri-state selection.

use proptest::prelude::*;

use super::{descendant_ids, selection_state, selection_states, subtree_ids, toggle};
use super::{SelectionSet, SelectionState};
use crate::node::{preorder, Node, NodeId};
use crate::test_util::{console_fixture, raw_tree_strategy};

/// The ids whose pre-order position is flagged in `mask`.
fn subset_of(tree: &[Node], mask: &[bool]) -> SelectionSet {
    preorder(tree)
        .zip(mask.iter().copied().chain(std::iter::repeat(false)))
        .filter_map(|(n, keep)| keep.then(|| n.id.clone()))
        .collect()
}

fn tree_and_subset() -> impl Strategy<Value = (Vec<Node>, SelectionSet)> {
    raw_tree_strategy().prop_flat_map(|tree| {
        let len = preorder(&tree).count();
        (Just(tree), prop::collection::vec(any::<bool>(), len))
            .prop_map(|(tree, mask)| {
                let selected = subset_of(&tree, &mask);
                (tree, selected)
            })
    })
}

fn outside(node: &Node, selected: &SelectionSet) -> SelectionSet {
    let inside: SelectionSet = subtree_ids(node).cloned().collect();
    selected.difference(&inside).cloned().collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // On the fixture tree, folder state is exactly its descendant coverage.
    #[test]
    fn fixture_state_matches_coverage(mask in prop::collection::vec(any::<bool>(), 12)) {
        let tree = console_fixture();
        let selected = subset_of(&tree, &mask);
        for node in preorder(&tree) {
            let desc: Vec<&NodeId> = descendant_ids(node).collect();
            let hits = desc.iter().filter(|id| selected.contains(**id)).count();
            let expected = if desc.is_empty() {
                if selected.contains(&node.id) { SelectionState::All } else { SelectionState::None }
            } else if hits == desc.len() {
                SelectionState::All
            } else if hits == 0 {
                SelectionState::None
            } else {
                SelectionState::Partial
            };
            prop_assert_eq!(selection_state(node, &selected), expected);
        }
    }

    // Toggling anything that is not fully selected makes it fully selected and
    // leaves every id outside its subtree alone.
    #[test]
    fn toggle_from_partial_or_none_selects_all((tree, selected) in tree_and_subset()) {
        for node in preorder(&tree) {
            if selection_state(node, &selected) == SelectionState::All {
                continue;
            }
            let next = toggle(node, &selected);
            prop_assert_eq!(selection_state(node, &next), SelectionState::All);
            prop_assert_eq!(outside(node, &next), outside(node, &selected));
        }
    }

    // Toggling a fully selected node clears its whole subtree and nothing else.
    #[test]
    fn toggle_from_all_clears_subtree((tree, selected) in tree_and_subset()) {
        for node in preorder(&tree) {
            if selection_state(node, &selected) != SelectionState::All {
                continue;
            }
            let next = toggle(node, &selected);
            prop_assert!(subtree_ids(node).all(|id| !next.contains(id)));
            prop_assert_eq!(outside(node, &next), outside(node, &selected));
        }
    }

    // Select-then-deselect leaves the subtree at `None` coverage.
    #[test]
    fn double_toggle_returns_to_none((tree, selected) in tree_and_subset()) {
        for node in preorder(&tree) {
            if selection_state(node, &selected) == SelectionState::All {
                continue;
            }
            let twice = toggle(node, &toggle(node, &selected));
            prop_assert_eq!(selection_state(node, &twice), SelectionState::None);
            prop_assert_eq!(outside(node, &twice), outside(node, &selected));
        }
    }

    // Childless nodes never report `Partial`.
    #[test]
    fn childless_nodes_are_never_partial((tree, selected) in tree_and_subset()) {
        for node in preorder(&tree).filter(|n| n.children.is_empty()) {
            prop_assert_ne!(selection_state(node, &selected), SelectionState::Partial);
        }
    }

    // The one-pass computation agrees with per-node reads.
    #[test]
    fn bulk_states_agree((tree, selected) in tree_and_subset()) {
        let states = selection_states(&tree, &selected);
        for node in preorder(&tree) {
            prop_assert_eq!(states[&node.id], selection_state(node, &selected));
        }
    }
}
