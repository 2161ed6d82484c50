//! Menu tree data model.
//!
//! A menu tree is a forest of [`Node`]s. Each parent owns its children, so the
//! forest is acyclic by construction. Node ids are expected to be unique
//! across the whole forest; the file-backed repository checks this on load.
//!
//! The serde representation matches the wire shape supplied by the menu
//! repository: `{ id, key, menuType: "FOLDER" | "MENU", route?, children? }`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// An opaque, stable node identifier.
///
/// Ids are compared as strings. Numeric ids in input documents are accepted
/// and converted to their decimal string form.
///
/// # Examples
///
/// ```
/// use menutree::NodeId;
///
/// let id = NodeId::from("users");
/// assert_eq!(id.as_str(), "users");
/// assert_eq!(format!("{id}"), "users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// Whether a node is a structural folder or a navigable leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A folder groups children and is never navigable itself.
    #[serde(rename = "FOLDER")]
    Folder,
    /// A terminal, navigable menu entry.
    #[serde(rename = "MENU")]
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::Leaf => write!(f, "leaf"),
        }
    }
}

/// One menu or folder record.
///
/// `sort_order`, `is_visible`, `key` and `name` are presentation metadata.
/// They are carried through every transformation unchanged and never consulted
/// by the tree algorithms.
///
/// # Examples
///
/// ```
/// use menutree::{Node, NodeKind};
///
/// let system = Node::folder("system", Some("system"))
///     .with_children(vec![Node::leaf("users", Some("users"))]);
///
/// assert_eq!(system.kind, NodeKind::Folder);
/// assert_eq!(system.children.len(), 1);
/// assert!(system.children[0].is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,

    /// Display key supplied by the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Folder or leaf.
    #[serde(rename = "menuType")]
    pub kind: NodeKind,

    /// Relative route fragment on a raw tree, absolute path once normalized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Presentation ordering hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// Presentation visibility flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// Ordered children; always empty for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a childless node of the given kind.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, route: Option<&str>) -> Self {
        Self {
            id: id.into(),
            key: None,
            name: None,
            kind,
            route: route.map(str::to_string),
            sort_order: None,
            is_visible: None,
            children: Vec::new(),
        }
    }

    /// Creates a folder node.
    #[must_use]
    pub fn folder(id: impl Into<NodeId>, route: Option<&str>) -> Self {
        Self::new(id, NodeKind::Folder, route)
    }

    /// Creates a leaf node.
    #[must_use]
    pub fn leaf(id: impl Into<NodeId>, route: Option<&str>) -> Self {
        Self::new(id, NodeKind::Leaf, route)
    }

    /// Replaces the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns true for folder nodes.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Returns true for leaf nodes.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// The route, treating an empty string as absent.
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref().filter(|r| !r.is_empty())
    }

    /// Best available label: name, then key, then id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.key.as_deref())
            .unwrap_or_else(|| self.id.as_str())
    }

    /// Iterates this node and its whole subtree in depth-first pre-order.
    #[must_use]
    pub fn iter(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
}

/// Depth-first pre-order traversal over a forest.
///
/// Created by [`Node::iter`] or [`preorder`].
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Iterates every node of a forest in depth-first pre-order.
///
/// # Examples
///
/// ```
/// use menutree::node::{preorder, Node};
///
/// let tree = vec![
///     Node::folder("a", Some("a")).with_children(vec![Node::leaf("b", Some("b"))]),
///     Node::leaf("c", Some("c")),
/// ];
/// let ids: Vec<&str> = preorder(&tree).map(|n| n.id.as_str()).collect();
/// assert_eq!(ids, ["a", "b", "c"]);
/// ```
#[must_use]
pub fn preorder(nodes: &[Node]) -> Preorder<'_> {
    Preorder {
        stack: nodes.iter().rev().collect(),
    }
}

/// Finds a node anywhere in a forest by id.
#[must_use]
pub fn find_node<'a>(nodes: &'a [Node], id: &NodeId) -> Option<&'a Node> {
    preorder(nodes).find(|n| &n.id == id)
}
