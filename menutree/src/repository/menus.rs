//! Menu forest sources.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::node::{preorder, Node};

/// Supplies the raw menu forest.
pub trait MenuRepository {
    /// Fetch the whole forest, un-normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or is malformed.
    fn fetch_menus(&self) -> Result<Vec<Node>>;
}

/// Document formats understood by [`FileMenuRepository`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl MenuFormat {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "menu file must end in .json, .yaml or .yml".to_string(),
            }),
        }
    }
}

/// Reads a menu forest from a JSON or YAML file.
///
/// # Examples
///
/// ```no_run
/// use menutree::repository::{FileMenuRepository, MenuRepository};
///
/// let repo = FileMenuRepository::new("menus.json");
/// let raw = repo.fetch_menus().unwrap();
/// println!("{} root nodes", raw.len());
/// ```
#[derive(Debug, Clone)]
pub struct FileMenuRepository {
    path: PathBuf,
}

impl FileMenuRepository {
    /// Create a repository over `path`. Nothing is read until fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MenuRepository for FileMenuRepository {
    fn fetch_menus(&self) -> Result<Vec<Node>> {
        let format = MenuFormat::from_path(&self.path)?;
        let contents = fs::read_to_string(&self.path).map_err(|e| Error::InvalidPath {
            path: self.path.clone(),
            reason: format!("Failed to read menu file: {e}"),
        })?;

        let nodes = parse_menus(&contents, format)?;
        log::debug!(
            "loaded {} menu nodes from {}",
            preorder(&nodes).count(),
            self.path.display()
        );
        Ok(nodes)
    }
}

/// Parse and validate a menu document.
///
/// # Errors
///
/// Returns a parse error, or [`Error::DuplicateNodeId`] if an id repeats.
pub fn parse_menus(contents: &str, format: MenuFormat) -> Result<Vec<Node>> {
    let nodes: Vec<Node> = match format {
        MenuFormat::Json => serde_json::from_str(contents)?,
        MenuFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    check_unique_ids(&nodes)?;
    Ok(nodes)
}

/// Fail on the first id seen twice in pre-order.
///
/// # Errors
///
/// Returns [`Error::DuplicateNodeId`] naming the repeated id.
pub fn check_unique_ids(nodes: &[Node]) -> Result<()> {
    let mut seen = HashSet::new();
    for node in preorder(nodes) {
        if !seen.insert(&node.id) {
            return Err(Error::DuplicateNodeId {
                id: node.id.clone(),
            });
        }
    }
    Ok(())
}

/// Serves a fixed forest.
#[derive(Debug, Clone, Default)]
pub struct MemoryMenuRepository {
    nodes: Vec<Node>,
}

impl MemoryMenuRepository {
    /// Wrap an already built forest.
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl MenuRepository for MemoryMenuRepository {
    fn fetch_menus(&self) -> Result<Vec<Node>> {
        Ok(self.nodes.clone())
    }
}
