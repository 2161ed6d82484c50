//! Role assignment persistence.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::node::NodeId;
use crate::selection::SelectionSet;

/// The menu ids granted to one role.
///
/// Folder ids are kept as well as leaf ids. No structure is implied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Granted ids.
    #[serde(default)]
    pub menu_ids: Vec<NodeId>,
}

impl Assignment {
    /// Build an assignment from a selection. Ids come out sorted.
    #[must_use]
    pub fn from_selection(selected: &SelectionSet) -> Self {
        Self {
            menu_ids: selected.iter().cloned().collect(),
        }
    }

    /// Seed a selection from the stored ids.
    #[must_use]
    pub fn to_selection(&self) -> SelectionSet {
        self.menu_ids.iter().cloned().collect()
    }
}

/// Loads and saves role assignments.
pub trait AssignmentStore {
    /// The assignment for `role`. A role with no record is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self, role: &str) -> Result<Assignment>;

    /// Replace the assignment for `role`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save(&self, role: &str, assignment: &Assignment) -> Result<()>;
}

/// One role's entry in the assignments document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    /// Granted ids, sorted.
    #[serde(default)]
    pub menu_ids: Vec<NodeId>,
    /// When the record was last written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The whole assignments document, keyed by role.
pub type AssignmentDocument = BTreeMap<String, AssignmentRecord>;

/// Keeps every role's assignment in one JSON file.
///
/// ```json
/// { "admin": { "menuIds": ["1", "2"], "updatedAt": "2024-05-01T10:00:00Z" } }
/// ```
///
/// # Examples
///
/// ```no_run
/// use menutree::repository::{AssignmentStore, FileAssignmentStore};
///
/// let store = FileAssignmentStore::new("assignments.json");
/// let assignment = store.load("admin").unwrap();
/// println!("{} ids", assignment.menu_ids.len());
/// ```
#[derive(Debug, Clone)]
pub struct FileAssignmentStore {
    path: PathBuf,
}

impl FileAssignmentStore {
    /// Create a store over `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing file is an empty document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read_document(&self) -> Result<AssignmentDocument> {
        if !self.path.exists() {
            return Ok(AssignmentDocument::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| Error::InvalidPath {
            path: self.path.clone(),
            reason: format!("Failed to read assignments file: {e}"),
        })?;
        if contents.trim().is_empty() {
            return Ok(AssignmentDocument::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_document(&self, document: &AssignmentDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut contents = serde_json::to_string_pretty(document)?;
        contents.push('\n');

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, contents)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl AssignmentStore for FileAssignmentStore {
    fn load(&self, role: &str) -> Result<Assignment> {
        let document = self.read_document()?;
        Ok(document
            .get(role)
            .map(|record| Assignment {
                menu_ids: record.menu_ids.clone(),
            })
            .unwrap_or_default())
    }

    fn save(&self, role: &str, assignment: &Assignment) -> Result<()> {
        let mut document = self.read_document()?;
        let mut menu_ids = assignment.menu_ids.clone();
        menu_ids.sort();
        menu_ids.dedup();

        log::debug!(
            "saving {} menu ids for role '{role}' to {}",
            menu_ids.len(),
            self.path.display()
        );
        document.insert(
            role.to_string(),
            AssignmentRecord {
                menu_ids,
                updated_at: Some(Utc::now()),
            },
        );
        self.write_document(&document)
    }
}

/// Holds assignments in memory.
#[derive(Debug, Default)]
pub struct MemoryAssignmentStore {
    roles: RefCell<BTreeMap<String, Assignment>>,
}

impl MemoryAssignmentStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with one role already assigned.
    #[must_use]
    pub fn with_role(role: &str, menu_ids: Vec<NodeId>) -> Self {
        let store = Self::new();
        store
            .roles
            .borrow_mut()
            .insert(role.to_string(), Assignment { menu_ids });
        store
    }
}

impl AssignmentStore for MemoryAssignmentStore {
    fn load(&self, role: &str) -> Result<Assignment> {
        Ok(self.roles.borrow().get(role).cloned().unwrap_or_default())
    }

    fn save(&self, role: &str, assignment: &Assignment) -> Result<()> {
        self.roles
            .borrow_mut()
            .insert(role.to_string(), assignment.clone());
        Ok(())
    }
}
