//! Route handling for menu trees.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! A raw menu tree stores route fragments relative to the parent node.
//! [`normalize_tree`] rewrites each node's route into an absolute path and
//! prunes nodes that cannot be resolved. A folder without its own route takes
//! the path of its parent.
//!
//! ## Matching
//!
//! [`matching::is_route_match`] compares a node route with a navigation path
//! after stripping query strings, fragments and trailing slashes. Prefix
//! matches must end on a `/` boundary.
//!
//! ## Resolution
//!
//! [`resolve`] walks a normalized tree and returns the most specific matching
//! leaf together with the folder ids that contain it.
//!
//! # Examples
//!
//! ```
//! use menutree::{Node, NodeId};
//! use menutree::route::{normalize_tree, resolve};
//!
//! let raw = vec![Node::folder("admin", Some("admin")).with_children(vec![
//!     Node::leaf("overview", Some("/")),
//!     Node::leaf("roles", Some("roles")),
//! ])];
//! let tree = normalize_tree(&raw);
//!
//! let resolution = resolve(&tree, "/admin/roles/5");
//! assert_eq!(resolution.active_id, Some(NodeId::from("roles")));
//! assert_eq!(resolution.ancestor_folder_ids, vec![NodeId::from("admin")]);
//! ```

pub mod matching;
pub mod normalize;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use matching::{is_route_match, normalize_path};
pub use normalize::{join_route, normalize, normalize_tree};
pub use resolver::{resolve, Resolution};
