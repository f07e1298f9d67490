//! Active-item resolution over a navigation tree.

use crate::nav::item::{walk, ItemId, NavItem};
use crate::nav::predicate::{matches_exactly, ActivePredicate};
use std::collections::BTreeSet;
use tracing::trace;

/// Which items are active and which branches must be open to show them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveResolution {
    active: Vec<ItemId>,
    expanded: BTreeSet<ItemId>,
}

impl ActiveResolution {
    /// Active items in traversal order.
    ///
    /// More than one entry means the predicate selects several items, or
    /// the tree has duplicate paths (a caller error).
    pub fn active(&self) -> &[ItemId] {
        &self.active
    }

    /// Strict ancestors of every active item.
    pub fn expanded(&self) -> &BTreeSet<ItemId> {
        &self.expanded
    }

    /// First active item in traversal order.
    pub fn primary(&self) -> Option<&ItemId> {
        self.active.first()
    }

    pub fn is_active(&self, id: &ItemId) -> bool {
        self.active.contains(id)
    }

    pub fn is_expanded(&self, id: &ItemId) -> bool {
        self.expanded.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Resolve the active items of `items` for `active_path`.
///
/// Items are tested depth-first in array order, parents before children.
/// With a `predicate`, it alone decides; otherwise an item is active when
/// its path equals `active_path`. The tree is never modified.
///
/// # Example
///
/// ```rust
/// use controlstate::nav::{resolve_active, ItemId, NavItem};
///
/// let items = vec![
///     NavItem::new("Guides").with_subnav(vec![
///         NavItem::new("Install").with_path("/guides/install"),
///     ]),
///     NavItem::new("API").with_path("/api"),
/// ];
///
/// let resolution = resolve_active(&items, Some("/guides/install"), None);
///
/// assert_eq!(resolution.active(), &[ItemId::from_indices(&[0, 0])]);
/// assert!(resolution.is_expanded(&ItemId::root(0)));
/// assert!(!resolution.is_expanded(&ItemId::root(1)));
/// ```
pub fn resolve_active(
    items: &[NavItem],
    active_path: Option<&str>,
    predicate: Option<&ActivePredicate>,
) -> ActiveResolution {
    let mut resolution = ActiveResolution::default();

    for (id, item) in walk(items) {
        let hit = match predicate {
            Some(predicate) => predicate.check(item, active_path),
            None => matches_exactly(item, active_path),
        };
        if hit {
            resolution.expanded.extend(id.ancestors());
            resolution.active.push(id);
        }
    }

    trace!(
        active_path,
        custom_predicate = predicate.is_some(),
        active = resolution.active.len(),
        expanded = resolution.expanded.len(),
        "resolved navigation tree"
    );
    resolution
}
