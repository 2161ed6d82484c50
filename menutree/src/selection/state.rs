//! Tri-state selection values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Displayed selection state of a node.
///
/// For a node with descendants the state reflects descendant coverage only.
/// For a node without descendants it reflects the node's own membership, and
/// `Partial` cannot occur.
///
/// # Examples
///
/// ```
/// use menutree::SelectionState;
///
/// assert!(SelectionState::All.is_checked());
/// assert!(SelectionState::Partial.is_indeterminate());
/// assert_eq!(format!("{}", SelectionState::None), "none");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    /// Every descendant (or the node itself, when it has none) is selected.
    All,
    /// Some but not all descendants are selected.
    Partial,
    /// Nothing relevant is selected.
    None,
}

impl SelectionState {
    /// Classify `selected` out of `total` descendants.
    ///
    /// `own` is the node's own membership and only matters when `total` is
    /// zero.
    #[must_use]
    pub fn from_coverage(selected: usize, total: usize, own: bool) -> Self {
        if total == 0 {
            return if own { Self::All } else { Self::None };
        }
        match selected {
            0 => Self::None,
            n if n >= total => Self::All,
            _ => Self::Partial,
        }
    }

    /// True for [`SelectionState::All`].
    #[must_use]
    pub fn is_checked(self) -> bool {
        self == Self::All
    }

    /// True for [`SelectionState::Partial`].
    #[must_use]
    pub fn is_indeterminate(self) -> bool {
        self == Self::Partial
    }

    /// Checkbox-style marker used by text output.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::All => "[x]",
            Self::Partial => "[-]",
            Self::None => "[ ]",
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Partial => write!(f, "partial"),
            Self::None => write!(f, "none"),
        }
    }
}
