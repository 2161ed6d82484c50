//! Stateful menu editing session.
//!
//! The engine functions are pure. [`MenuSession`] owns the state a screen
//! needs between calls: the normalized tree, the selection being edited, the
//! expanded folders and the active leaf. Every mutation goes through the
//! engine functions.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::expansion::ExpansionSet;
use crate::node::{find_node, Node, NodeId};
use crate::repository::{Assignment, AssignmentStore, MenuRepository};
use crate::route::{normalize_tree, resolve, Resolution};
use crate::selection::{selection_state, selection_states, toggle, SelectionSet, SelectionState};

/// Editing state for one role's menu assignment.
///
/// # Examples
///
/// ```
/// use menutree::{MenuSession, Node, NodeId, SelectionState};
///
/// let raw = vec![Node::folder("system", Some("system")).with_children(vec![
///     Node::leaf("users", Some("users")),
///     Node::leaf("roles", Some("roles")),
/// ])];
///
/// let mut session = MenuSession::new("admin", &raw, Default::default());
/// session.navigate("/system/users/42");
/// assert_eq!(session.active_id(), Some(&NodeId::from("users")));
///
/// let state = session.toggle(&NodeId::from("system")).unwrap();
/// assert_eq!(state, SelectionState::All);
/// assert!(session.is_dirty());
/// ```
#[derive(Debug, Clone)]
pub struct MenuSession {
    role: String,
    tree: Vec<Node>,
    selected: SelectionSet,
    expanded: ExpansionSet,
    active_id: Option<NodeId>,
    dirty: bool,
}

impl MenuSession {
    /// Start a session over a raw forest with an initial selection.
    #[must_use]
    pub fn new(role: impl Into<String>, raw: &[Node], selected: SelectionSet) -> Self {
        Self {
            role: role.into(),
            tree: normalize_tree(raw),
            selected,
            expanded: ExpansionSet::new(),
            active_id: None,
            dirty: false,
        }
    }

    /// Fetch the forest and the role's assignment and start a session.
    ///
    /// # Errors
    ///
    /// Returns whatever the repository or the store fails with.
    pub fn load<R, S>(repository: &R, store: &S, role: &str) -> Result<Self>
    where
        R: MenuRepository + ?Sized,
        S: AssignmentStore + ?Sized,
    {
        let raw = repository.fetch_menus()?;
        let assignment = store.load(role)?;
        log::debug!(
            "session for role '{role}' starts with {} assigned ids",
            assignment.menu_ids.len()
        );
        Ok(Self::new(role, &raw, assignment.to_selection()))
    }

    /// Replace the tree with a fresh fetch.
    ///
    /// The selection is kept as is. Expanded ids that no longer name a folder
    /// are dropped, and the active leaf is cleared if it disappeared.
    ///
    /// # Errors
    ///
    /// Returns whatever the repository fails with.
    pub fn reload<R>(&mut self, repository: &R) -> Result<()>
    where
        R: MenuRepository + ?Sized,
    {
        let raw = repository.fetch_menus()?;
        self.tree = normalize_tree(&raw);
        self.expanded.retain_folders(&self.tree);
        if let Some(ref id) = self.active_id {
            if find_node(&self.tree, id).is_none() {
                self.active_id = None;
            }
        }
        Ok(())
    }

    /// The role being edited.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// The normalized tree.
    #[must_use]
    pub fn tree(&self) -> &[Node] {
        &self.tree
    }

    /// The current selection.
    #[must_use]
    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    /// The expanded folders.
    #[must_use]
    pub fn expanded(&self) -> &ExpansionSet {
        &self.expanded
    }

    /// The leaf matched by the last [`navigate`](Self::navigate).
    #[must_use]
    pub fn active_id(&self) -> Option<&NodeId> {
        self.active_id.as_ref()
    }

    /// True when the selection changed since load or the last save.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Resolve `current_path`, mark the matched leaf active and expand the
    /// folders above it. Folders already expanded stay expanded.
    pub fn navigate(&mut self, current_path: &str) -> Resolution {
        let resolution = resolve(&self.tree, current_path);
        let opened = self.expanded.reveal(&resolution);
        log::debug!(
            "navigate {current_path}: active={:?}, {opened} folders opened",
            resolution.active_id.as_ref().map(NodeId::as_str)
        );
        self.active_id.clone_from(&resolution.active_id);
        resolution
    }

    /// Flip the node's whole subtree and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `id` is not in the tree.
    pub fn toggle(&mut self, id: &NodeId) -> Result<SelectionState> {
        let node = self.node(id)?;
        let next = toggle(node, &self.selected);
        let state = selection_state(node, &next);
        log::debug!("toggle {id}: now {state}");
        if next != self.selected {
            self.selected = next;
            self.dirty = true;
        }
        Ok(state)
    }

    /// Flip a folder's expanded flag and return the new flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `id` is not in the tree.
    pub fn toggle_expanded(&mut self, id: &NodeId) -> Result<bool> {
        self.node(id)?;
        Ok(self.expanded.toggle(id))
    }

    /// The tri-state of one node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `id` is not in the tree.
    pub fn state_of(&self, id: &NodeId) -> Result<SelectionState> {
        Ok(selection_state(self.node(id)?, &self.selected))
    }

    /// The tri-state of every node.
    #[must_use]
    pub fn states(&self) -> BTreeMap<NodeId, SelectionState> {
        selection_states(&self.tree, &self.selected)
    }

    /// The assignment that [`save`](Self::save) would write.
    #[must_use]
    pub fn assignment(&self) -> Assignment {
        Assignment::from_selection(&self.selected)
    }

    /// Persist the selection for this session's role and clear the dirty flag.
    ///
    /// # Errors
    ///
    /// Returns whatever the store fails with; the dirty flag is left set.
    pub fn save<S>(&mut self, store: &S) -> Result<()>
    where
        S: AssignmentStore + ?Sized,
    {
        store.save(&self.role, &self.assignment())?;
        self.dirty = false;
        Ok(())
    }

    fn node(&self, id: &NodeId) -> Result<&Node> {
        find_node(&self.tree, id).ok_or_else(|| Error::NodeNotFound { id: id.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryAssignmentStore, MemoryMenuRepository};
    use crate::test_util::{console_fixture, ids, system_fixture};

    fn session() -> MenuSession {
        MenuSession::new("admin", &console_fixture(), SelectionSet::new())
    }

    #[test]
    fn test_new_normalizes_tree() {
        let session = session();
        let roles = find_node(session.tree(), &NodeId::from("roles")).unwrap();
        assert_eq!(roles.route(), Some("/admin/roles"));
        assert!(!session.is_dirty());
        assert!(session.expanded().is_empty());
    }

    #[test]
    fn test_navigate_sets_active_and_unions_expansion() {
        let mut session = session();
        session.toggle_expanded(&NodeId::from("reports")).unwrap();

        let resolution = session.navigate("/admin/users?tab=2");
        assert_eq!(resolution.active_id, Some(NodeId::from("users")));
        assert_eq!(session.active_id(), Some(&NodeId::from("users")));
        for id in ["reports", "admin", "access"] {
            assert!(session.expanded().is_expanded(&NodeId::from(id)), "{id}");
        }

        session.navigate("/nowhere");
        assert_eq!(session.active_id(), None);
        assert_eq!(session.expanded().len(), 3);
    }

    #[test]
    fn test_toggle_marks_dirty_and_cascades() {
        let mut session = session();
        let state = session.toggle(&NodeId::from("access")).unwrap();
        assert_eq!(state, SelectionState::All);
        assert!(session.is_dirty());
        assert_eq!(
            session.state_of(&NodeId::from("admin")).unwrap(),
            SelectionState::Partial
        );
        assert!(session.selected().contains(&NodeId::from("menus")));
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut session = session();
        let err = session.toggle(&NodeId::from("ghost")).unwrap_err();
        assert!(err.is_not_found());
        assert!(!session.is_dirty());
        assert!(session.state_of(&NodeId::from("ghost")).is_err());
        assert!(session.toggle_expanded(&NodeId::from("ghost")).is_err());
    }

    #[test]
    fn test_states_cover_every_node() {
        let mut session = session();
        session.toggle(&NodeId::from("daily")).unwrap();
        let states = session.states();
        assert_eq!(states.len(), crate::node::preorder(session.tree()).count());
        assert_eq!(states[&NodeId::from("reports")], SelectionState::Partial);
        assert_eq!(states[&NodeId::from("admin")], SelectionState::None);
    }

    #[test]
    fn test_load_and_save_round_trip() {
        let repo = MemoryMenuRepository::new(system_fixture());
        let store = MemoryAssignmentStore::with_role("admin", ids(&["users"]));

        let mut session = MenuSession::load(&repo, &store, "admin").unwrap();
        assert_eq!(
            session.state_of(&NodeId::from("system")).unwrap(),
            SelectionState::Partial
        );

        session.toggle(&NodeId::from("system")).unwrap();
        session.save(&store).unwrap();
        assert!(!session.is_dirty());

        let saved = store.load("admin").unwrap();
        assert_eq!(saved.menu_ids, ids(&["roles", "system", "users"]));

        let reloaded = MenuSession::load(&repo, &store, "admin").unwrap();
        assert_eq!(reloaded.selected(), session.selected());
    }

    #[test]
    fn test_reload_drops_stale_state() {
        let mut session = MenuSession::new("admin", &console_fixture(), SelectionSet::new());
        session.navigate("/reports/daily");
        assert!(session.expanded().is_expanded(&NodeId::from("reports")));

        session
            .reload(&MemoryMenuRepository::new(system_fixture()))
            .unwrap();
        assert!(session.expanded().is_empty());
        assert_eq!(session.active_id(), None);
    }
}
