//! Common test utilities for integration tests.
//!
//! Fixture forests and a temporary workspace holding menu and assignment
//! files.

use std::fs;
use std::path::{Path, PathBuf};

use menutree::{Node, NodeId};
use tempfile::TempDir;

/// The `system/{users, roles}` forest, with a stray root leaf that has no
/// route and is pruned on normalization.
#[allow(dead_code)]
pub fn system_forest() -> Vec<Node> {
    vec![
        Node::folder("system", Some("system")).with_children(vec![
            Node::leaf("users", Some("users")),
            Node::leaf("roles", Some("roles")),
        ]),
        Node::leaf("orphan", None),
    ]
}

/// A deeper forest used for resolution tests.
#[allow(dead_code)]
pub fn admin_forest() -> Vec<Node> {
    vec![
        Node::leaf("home", Some("/")),
        Node::folder("admin", Some("admin")).with_children(vec![
            Node::leaf("admin-index", Some("")),
            Node::leaf("users", Some("users")),
            Node::leaf("users2", Some("users2")),
            Node::folder("access", None).with_children(vec![
                Node::leaf("roles", Some("roles")),
                Node::leaf("role-detail", Some("roles/detail")),
            ]),
        ]),
    ]
}

/// Collect a list of string ids.
#[allow(dead_code)]
pub fn ids(list: &[&str]) -> Vec<NodeId> {
    list.iter().map(|s| NodeId::from(*s)).collect()
}

/// A temporary directory with menu and assignment file paths.
#[allow(dead_code)]
pub struct Workspace {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    /// An empty workspace.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A workspace whose `menus.json` holds `forest`.
    pub fn with_menus(forest: &[Node]) -> Self {
        let ws = Self::new();
        ws.write("menus.json", &serde_json::to_string_pretty(forest).unwrap());
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn menu_file(&self) -> PathBuf {
        self.path().join("menus.json")
    }

    pub fn assignments_file(&self) -> PathBuf {
        self.path().join("assignments.json")
    }

    /// Write `contents` to `name` inside the workspace.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).unwrap()
    }
}
