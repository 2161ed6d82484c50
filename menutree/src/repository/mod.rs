//! Boundary collaborators: where menu forests come from and where role
//! assignments are kept.
//!
//! The tree algorithms never touch these. A [`crate::MenuSession`] pulls the
//! raw forest from a [`MenuRepository`], seeds its selection from an
//! [`AssignmentStore`], and writes the selection back on save.

mod assignments;
mod menus;

pub use assignments::{
    Assignment, AssignmentDocument, AssignmentRecord, AssignmentStore, FileAssignmentStore,
    MemoryAssignmentStore,
};
pub use menus::{
    check_unique_ids, parse_menus, FileMenuRepository, MemoryMenuRepository, MenuFormat,
    MenuRepository,
};
