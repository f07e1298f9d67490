//! Applied-transition history.
//!
//! Every transition an engine actually applies is recorded here, in order.
//! Advisory transitions computed in controlled mode are not recorded. The
//! history is bounded: once full, the oldest entry is dropped.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::vec_deque::{self, VecDeque};

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use controlstate::core::StateTransition;
/// use controlstate::nav::NavState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     kind: "item-select".to_string(),
///     from: NavState::default(),
///     to: NavState::at("/docs"),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to.active_path.as_deref(), Some("/docs"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Name of the transition kind that produced this change
    pub kind: String,
    /// The state before the transition
    pub from: S,
    /// The authoritative state after the transition
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Default number of transitions kept by a [`StateHistory`].
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Bounded, ordered history of applied transitions.
///
/// # Example
///
/// ```rust
/// use controlstate::core::{StateHistory, StateTransition};
/// use controlstate::controls::CheckedState;
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(2);
/// for checked in [true, false, true] {
///     history.record(StateTransition {
///         kind: "change".to_string(),
///         from: CheckedState::unchecked(),
///         to: CheckedState { checked, indeterminate: false },
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.last().map(|t| t.to.checked), Some(true));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(skip, default = "default_limit")]
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`] entries.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` entries. A limit of
    /// zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the limit, dropping the oldest entries that no longer fit.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        while self.transitions.len() > limit {
            self.transitions.pop_front();
        }
    }

    /// Append a transition in place, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.limit == 0 {
            return;
        }
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Most recently applied transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> vec_deque::Iter<'_, StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
