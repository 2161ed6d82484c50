#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # menutree
//!
//! A library for working with hierarchical navigation menus.
//!
//! A menu forest is a set of folders and leaves. Each node carries a route
//! fragment relative to its parent. This library turns those fragments into
//! absolute paths, finds the leaf that matches the current navigation path,
//! and keeps a role's menu assignment as a tri-state checkbox tree.
//!
//! ## Core Types
//!
//! - [`Node`], [`NodeId`] and [`NodeKind`]: the menu forest
//! - [`route`]: normalization and active route resolution
//! - [`SelectionSet`] and [`SelectionState`]: tri-state selection
//! - [`ExpansionSet`]: expanded folders of a tree view
//! - [`MenuSession`]: editing state tying the above to a repository and an
//!   assignment store
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use menutree::{Node, NodeId, SelectionSet, SelectionState};
//! use menutree::route::{normalize_tree, resolve};
//! use menutree::selection::{selection_state, toggle};
//!
//! let raw = vec![Node::folder("system", Some("system")).with_children(vec![
//!     Node::leaf("users", Some("/users")),
//!     Node::leaf("roles", Some("/roles")),
//! ])];
//! let tree = normalize_tree(&raw);
//!
//! let resolution = resolve(&tree, "/system/users/42");
//! assert_eq!(resolution.active_id, Some(NodeId::from("users")));
//!
//! let selected = toggle(&tree[0].children[0], &SelectionSet::new());
//! assert_eq!(selection_state(&tree[0], &selected), SelectionState::Partial);
//! ```

pub mod config;
pub mod error;
pub mod expansion;
pub mod logging;
pub mod node;
pub mod output;
pub mod repository;
pub mod route;
pub mod selection;
pub mod session;

#[cfg(test)]
mod test_util;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use expansion::ExpansionSet;
pub use logging::{init_logger, LogLevel, Logger};
pub use node::{find_node, preorder, Node, NodeId, NodeKind};
pub use repository::{
    Assignment, AssignmentStore, FileAssignmentStore, FileMenuRepository, MenuRepository,
};
pub use route::Resolution;
pub use selection::{SelectionSet, SelectionState};
pub use session::MenuSession;
