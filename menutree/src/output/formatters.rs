//! Output formatter implementations.

use std::fmt::Write as _;

use serde::Serialize;

use crate::expansion::ExpansionSet;
use crate::node::{Node, NodeId, NodeKind};
use crate::route::Resolution;
use crate::selection::SelectionState;
use crate::Result;

use super::{TreeFormatter, TreeView};

/// Indented text tree for terminals.
///
/// ```text
/// ▾ [-] System  /system
///     [x] Users  /system/users *
///     [ ] Roles  /system/roles
/// ```
pub struct HumanFormatter;

impl HumanFormatter {
    fn write_nodes(out: &mut String, view: &TreeView<'_>, nodes: &[Node], depth: usize) {
        for node in nodes {
            let _ = write!(out, "{}", "  ".repeat(depth));

            if node.is_folder() {
                out.push_str(if view.is_open(node) { "▾ " } else { "▸ " });
            } else {
                out.push_str("  ");
            }

            if let Some(state) = view.state_of(&node.id) {
                let _ = write!(out, "{} ", state.marker());
            }

            out.push_str(node.label());
            if let Some(route) = node.route() {
                let _ = write!(out, "  {route}");
            }
            if view.is_active(node) {
                out.push_str(" *");
            }
            out.push('\n');

            if node.is_folder() && view.is_open(node) {
                Self::write_nodes(out, view, &node.children, depth + 1);
            }
        }
    }

    fn join_ids<'a>(ids: impl IntoIterator<Item = &'a NodeId>, sep: &str) -> String {
        ids.into_iter()
            .map(NodeId::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl TreeFormatter for HumanFormatter {
    fn format_tree(&self, view: &TreeView<'_>) -> Result<String> {
        let mut out = String::new();
        Self::write_nodes(&mut out, view, view.tree, 0);
        Ok(out.trim_end().to_string())
    }

    fn format_resolution(
        &self,
        resolution: &Resolution,
        expanded: &ExpansionSet,
    ) -> Result<String> {
        let active = resolution
            .active_id
            .as_ref()
            .map_or("(none)", NodeId::as_str);

        let mut lines = vec![format!("active: {active}")];
        if !resolution.ancestor_folder_ids.is_empty() {
            lines.push(format!(
                "path: {}",
                Self::join_ids(&resolution.ancestor_folder_ids, " > ")
            ));
        }
        lines.push(format!("expanded: {}", Self::join_ids(expanded.iter(), ", ")));
        Ok(lines.join("\n"))
    }
}

/// JSON output.
pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonNode<'a> {
    id: &'a NodeId,
    label: &'a str,
    #[serde(rename = "menuType")]
    kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<SelectionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expanded: Option<bool>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode<'a>>,
}

impl<'a> JsonNode<'a> {
    fn build(view: &TreeView<'a>, nodes: &'a [Node]) -> Vec<Self> {
        nodes
            .iter()
            .map(|node| Self {
                id: &node.id,
                label: node.label(),
                kind: node.kind,
                route: node.route(),
                state: view.state_of(&node.id),
                expanded: match view.expanded {
                    Some(e) if node.is_folder() => Some(e.is_expanded(&node.id)),
                    _ => None,
                },
                active: view.is_active(node),
                children: Self::build(view, &node.children),
            })
            .collect()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResolution<'a> {
    #[serde(flatten)]
    resolution: &'a Resolution,
    expanded: &'a ExpansionSet,
}

impl TreeFormatter for JsonFormatter {
    fn format_tree(&self, view: &TreeView<'_>) -> Result<String> {
        let nodes = JsonNode::build(view, view.tree);
        Ok(serde_json::to_string_pretty(&nodes)?)
    }

    fn format_resolution(
        &self,
        resolution: &Resolution,
        expanded: &ExpansionSet,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(&JsonResolution {
            resolution,
            expanded,
        })?)
    }
}
