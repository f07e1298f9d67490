//! Side-navigation component state.

use crate::nav::item::{find, walk, ItemId, NavItem};
use crate::nav::predicate::ActivePredicate;
use crate::nav::resolve::{resolve_active, ActiveResolution};
use crate::nav::state::{NavState, NavTransition, SelectEvent};
use crate::reducer::{DispatchOutcome, StateReducerEngine, TransitionRequest};
use serde::Serialize;
use tracing::debug;

/// One line of rendered navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavRow {
    pub id: ItemId,
    pub title: String,
    /// Starts at 1 for root items
    pub level: usize,
    pub active: bool,
    pub expanded: bool,
    pub selectable: bool,
    pub has_subnav: bool,
}

/// Items plus the engine holding the active path.
///
/// # Example
///
/// ```rust
/// use controlstate::nav::{ItemId, NavItem, NavState, Navigation};
/// use controlstate::reducer::StateReducerEngine;
///
/// let items = vec![
///     NavItem::new("Colors").with_subnav(vec![
///         NavItem::new("Primary").with_path("/colors/primary"),
///     ]),
///     NavItem::new("Sizing").with_path("/sizing"),
/// ];
/// let mut nav = Navigation::new(items, StateReducerEngine::new(NavState::default()));
///
/// nav.select(&ItemId::from_indices(&[0, 0]));
///
/// let rows = nav.visible_rows();
/// assert_eq!(rows.len(), 3);
/// assert!(rows[0].expanded);
/// assert!(rows[1].active);
/// ```
pub struct Navigation {
    items: Vec<NavItem>,
    engine: StateReducerEngine<NavTransition, NavState, SelectEvent>,
    predicate: Option<ActivePredicate>,
}

impl Navigation {
    pub fn new(
        items: Vec<NavItem>,
        engine: StateReducerEngine<NavTransition, NavState, SelectEvent>,
    ) -> Self {
        Self {
            items,
            engine,
            predicate: None,
        }
    }

    pub fn with_predicate(mut self, predicate: ActivePredicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Replace the tree. The active path is kept even if nothing matches it.
    pub fn set_items(&mut self, items: Vec<NavItem>) {
        self.items = items;
    }

    pub fn engine(&self) -> &StateReducerEngine<NavTransition, NavState, SelectEvent> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut StateReducerEngine<NavTransition, NavState, SelectEvent> {
        &mut self.engine
    }

    pub fn active_path(&self) -> Option<&str> {
        self.engine.current_state().active_path.as_deref()
    }

    /// Select the item at `id`, proposing its path as the active one.
    ///
    /// Returns `None` without dispatching when `id` does not exist in the
    /// tree or the item has no path: such items only group their children.
    pub fn select(&mut self, id: &ItemId) -> Option<DispatchOutcome<NavState>> {
        let Some(item) = find(&self.items, id) else {
            debug!(%id, "ignored selection of unknown item");
            return None;
        };
        let Some(path) = item.path.clone() else {
            debug!(%id, title = %item.title, "ignored selection of item without path");
            return None;
        };
        let event = SelectEvent {
            id: id.clone(),
            item: item.clone(),
        };
        let request = TransitionRequest::item_select(Some(path));
        Some(self.engine.dispatch(request, &event))
    }

    /// Select the first item (in traversal order) whose path is `path`.
    pub fn select_path(&mut self, path: &str) -> Option<DispatchOutcome<NavState>> {
        let id = walk(&self.items)
            .find(|(_, item)| item.path.as_deref() == Some(path))
            .map(|(id, _)| id)?;
        self.select(&id)
    }

    pub fn resolution(&self) -> ActiveResolution {
        resolve_active(&self.items, self.active_path(), self.predicate.as_ref())
    }

    /// Rows to render: root items always, children only below expanded
    /// branches.
    pub fn visible_rows(&self) -> Vec<NavRow> {
        let resolution = self.resolution();
        walk(&self.items)
            .filter(|(id, _)| id.ancestors().all(|ancestor| resolution.is_expanded(&ancestor)))
            .map(|(id, item)| NavRow {
                title: item.title.clone(),
                level: id.level(),
                active: resolution.is_active(&id),
                expanded: resolution.is_expanded(&id),
                selectable: item.is_selectable(),
                has_subnav: item.has_subnav(),
                id,
            })
            .collect()
    }
}
