//! Transition kinds, requests, and the control mode of an engine.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A tagged kind of state transition, together with its default table entry.
///
/// The default transition table maps `(kind, proposed, current)` to the next
/// state before any caller override runs. The library table for every kind
/// shipped with this crate passes the proposed state through verbatim, which
/// is what the provided `default_next` does.
///
/// Usually declared with [`transition_kinds!`](crate::transition_kinds).
pub trait TransitionKind: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Stable name used in logs and history records.
    fn name(&self) -> &'static str;

    /// Default next state for this kind.
    fn default_next<S: State>(&self, proposed: S, _current: &S) -> S {
        proposed
    }
}

/// Caller override of a transition.
///
/// Called as `reduce(kind, default_next, &current)`. Whatever it returns
/// becomes the authoritative next state; the engine does not check it.
/// Like the change notifier it need not be `Send`: an engine lives on the
/// thread that dispatches to it.
pub type StateReducerFn<K, S> = Box<dyn Fn(K, S, &S) -> S>;

/// A request to move to a proposed state, tagged with its kind.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRequest<K: TransitionKind, S: State> {
    pub kind: K,
    pub proposed: S,
}

impl<K: TransitionKind, S: State> TransitionRequest<K, S> {
    pub fn new(kind: K, proposed: S) -> Self {
        Self { kind, proposed }
    }
}

/// Who owns the authoritative state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Control<S: State> {
    /// The engine stores state internally and applies transitions to it.
    Uncontrolled,
    /// The caller supplies the state each cycle; transitions are advisory.
    Controlled(S),
}

impl<S: State> Default for Control<S> {
    fn default() -> Self {
        Self::Uncontrolled
    }
}

impl<S: State> Control<S> {
    /// `Some(value)` means controlled, `None` means uncontrolled.
    pub fn from_option(value: Option<S>) -> Self {
        match value {
            Some(value) => Self::Controlled(value),
            None => Self::Uncontrolled,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled(_))
    }

    /// The caller-supplied value, if controlled.
    pub fn value(&self) -> Option<&S> {
        match self {
            Self::Controlled(value) => Some(value),
            Self::Uncontrolled => None,
        }
    }
}
