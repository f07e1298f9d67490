//! Controlled/uncontrolled state container with pluggable transition override.

use crate::core::{State, StateHistory, StateTransition};
use crate::reducer::transition::{Control, StateReducerFn, TransitionKind, TransitionRequest};
use chrono::Utc;
use tracing::debug;

/// External change notifier, called with the payload of the originating event.
pub type ChangeNotifier<P> = Box<dyn FnMut(&P)>;

/// What a single [`dispatch`](StateReducerEngine::dispatch) did.
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchOutcome<S: State> {
    /// Name of the transition kind
    pub kind: &'static str,
    /// Authoritative state before the dispatch
    pub previous: S,
    /// State returned by the override, or the default table when none is set
    pub next: S,
    /// `next` differs from `previous`
    pub changed: bool,
    /// Controlled mode: `next` was reported but not stored
    pub advisory: bool,
    /// The change notifier was invoked
    pub notified: bool,
}

/// State container that routes every transition through a default table and
/// an optional caller override.
///
/// `P` is the payload handed to the change notifier (for example the
/// selected navigation item).
///
/// # Example
///
/// ```rust
/// use controlstate::nav::{NavState, NavTransition};
/// use controlstate::reducer::{StateReducerEngine, TransitionRequest};
///
/// let mut engine: StateReducerEngine<NavTransition, NavState, String> =
///     StateReducerEngine::new(NavState::default());
///
/// let outcome = engine.dispatch(
///     TransitionRequest::new(NavTransition::ItemSelect, NavState::at("/x")),
///     &"x".to_string(),
/// );
///
/// assert!(outcome.changed);
/// assert_eq!(engine.current_state(), &NavState::at("/x"));
/// ```
pub struct StateReducerEngine<K: TransitionKind, S: State, P = ()> {
    internal: S,
    control: Control<S>,
    reducer: Option<StateReducerFn<K, S>>,
    on_change: Option<ChangeNotifier<P>>,
    history: StateHistory<S>,
}

impl<K: TransitionKind, S: State, P> StateReducerEngine<K, S, P> {
    /// Create an uncontrolled engine without override or notifier.
    pub fn new(initial: S) -> Self {
        Self {
            internal: initial,
            control: Control::Uncontrolled,
            reducer: None,
            on_change: None,
            history: StateHistory::new(),
        }
    }

    pub(crate) fn from_parts(
        initial: S,
        control: Control<S>,
        reducer: Option<StateReducerFn<K, S>>,
        on_change: Option<ChangeNotifier<P>>,
        history_limit: usize,
    ) -> Self {
        Self {
            internal: initial,
            control,
            reducer,
            on_change,
            history: StateHistory::with_limit(history_limit),
        }
    }

    /// Install the transition override.
    pub fn set_reducer<F>(&mut self, reducer: F)
    where
        F: Fn(K, S, &S) -> S + 'static,
    {
        self.reducer = Some(Box::new(reducer));
    }

    /// Install the change notifier.
    pub fn set_on_change<F>(&mut self, on_change: F)
    where
        F: FnMut(&P) + 'static,
    {
        self.on_change = Some(Box::new(on_change));
    }

    /// Supply the caller-owned value for this cycle, or hand ownership back
    /// to the engine with [`Control::Uncontrolled`].
    pub fn set_control(&mut self, control: Control<S>) {
        self.control = control;
    }

    pub fn control(&self) -> &Control<S> {
        &self.control
    }

    pub fn is_controlled(&self) -> bool {
        self.control.is_controlled()
    }

    pub fn has_reducer(&self) -> bool {
        self.reducer.is_some()
    }

    /// The authoritative state: the caller's value when controlled, the
    /// internal one otherwise.
    pub fn current_state(&self) -> &S {
        match &self.control {
            Control::Controlled(value) => value,
            Control::Uncontrolled => &self.internal,
        }
    }

    /// Internally stored state, ignoring the control mode.
    pub fn internal_state(&self) -> &S {
        &self.internal
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Keep at most `limit` applied transitions (default
    /// [`DEFAULT_HISTORY_LIMIT`](crate::core::DEFAULT_HISTORY_LIMIT)); zero
    /// turns recording off.
    pub fn set_history_limit(&mut self, limit: usize) {
        self.history.set_limit(limit);
    }

    /// Apply one transition request.
    ///
    /// 1. The default table computes the default next state.
    /// 2. The override, if any, turns it into the authoritative next state.
    /// 3. Uncontrolled engines store it; controlled engines only report it.
    /// 4. The notifier fires with `payload` when the default next state
    ///    differs from the current one, whatever the override returned.
    pub fn dispatch(&mut self, request: TransitionRequest<K, S>, payload: &P) -> DispatchOutcome<S> {
        let TransitionRequest { kind, proposed } = request;
        let previous = self.current_state().clone();

        let default_next = kind.default_next(proposed, &previous);
        let proposes_change = default_next != previous;

        let next = match &self.reducer {
            Some(reduce) => reduce(kind, default_next, &previous),
            None => default_next,
        };
        let changed = next != previous;
        let advisory = self.control.is_controlled();

        if !advisory {
            if changed {
                self.history.record(StateTransition {
                    kind: kind.name().to_string(),
                    from: previous.clone(),
                    to: next.clone(),
                    timestamp: Utc::now(),
                });
            }
            self.internal = next.clone();
        }

        let mut notified = false;
        if proposes_change {
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(payload);
                notified = true;
            }
        }

        debug!(
            kind = kind.name(),
            from = previous.name(),
            to = next.name(),
            overridden = self.reducer.is_some(),
            changed,
            advisory,
            notified,
            "dispatched transition"
        );

        DispatchOutcome {
            kind: kind.name(),
            previous,
            next,
            changed,
            advisory,
            notified,
        }
    }

    /// Replace internal state and history wholesale, e.g. from a snapshot.
    ///
    /// The engine's own history limit is kept.
    pub(crate) fn restore(&mut self, internal: S, mut history: StateHistory<S>) {
        history.set_limit(self.history.limit());
        self.internal = internal;
        self.history = history;
    }
}
