//! Navigation state, its transitions, and the selection payload.

use crate::core::State;
use crate::nav::item::{ItemId, NavItem};
use crate::reducer::TransitionRequest;
use serde::{Deserialize, Serialize};

crate::transition_kinds! {
    /// Transitions of the side navigation.
    pub enum NavTransition {
        ItemSelect => "item-select",
    }
}

/// State owned by a navigation's reducer engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavState {
    pub active_path: Option<String>,
}

impl NavState {
    /// State with `path` active.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            active_path: Some(path.into()),
        }
    }
}

impl State for NavState {
    fn name(&self) -> &str {
        self.active_path.as_deref().unwrap_or("none")
    }
}

impl TransitionRequest<NavTransition, NavState> {
    /// Request produced by clicking an item: its path becomes the proposed
    /// active path (`None` for items without one).
    pub fn item_select(path: Option<String>) -> Self {
        Self::new(NavTransition::ItemSelect, NavState { active_path: path })
    }
}

/// Payload handed to the change notifier when an item is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectEvent {
    pub id: ItemId,
    pub item: NavItem,
}
