//! Error types for the menutree library.
//!
//! The tree algorithms themselves cannot fail. Errors only arise at the
//! boundaries: reading menu and assignment files, parsing them, validating
//! configuration, and looking up node ids named by a caller.

use std::path::PathBuf;

use thiserror::Error;

use crate::node::NodeId;

/// Result type alias for operations that may fail with a menutree error.
///
/// # Examples
///
/// ```
/// use menutree::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the menutree library.
#[derive(Debug, Error)]
pub enum Error {
    /// A file path could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is unusable.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML document could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The same node id appears more than once in a menu forest.
    #[error("duplicate node id '{id}' in menu tree")]
    DuplicateNodeId {
        /// The repeated id.
        id: NodeId,
    },

    /// A node id named by the caller is not part of the tree.
    #[error("node not found: {id}")]
    NodeNotFound {
        /// The id that was looked up.
        id: NodeId,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a missing node.
    ///
    /// # Examples
    ///
    /// ```
    /// use menutree::{Error, NodeId};
    ///
    /// let err = Error::NodeNotFound { id: NodeId::from("users") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound { .. })
    }
}
