//! Builder for constructing state reducer engines.

use crate::builder::error::BuildError;
use crate::core::{State, DEFAULT_HISTORY_LIMIT};
use crate::reducer::{ChangeNotifier, Control, StateReducerEngine, StateReducerFn, TransitionKind};

/// Builder for [`StateReducerEngine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use controlstate::builder::ReducerBuilder;
/// use controlstate::nav::{NavState, NavTransition, SelectEvent};
///
/// let engine = ReducerBuilder::<NavTransition, NavState, SelectEvent>::new()
///     .initial(NavState::at("/"))
///     .reducer(|_kind, next, _current| next)
///     .on_change(|event: &SelectEvent| println!("selected {}", event.item.title))
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.current_state(), &NavState::at("/"));
/// ```
pub struct ReducerBuilder<K: TransitionKind, S: State, P = ()> {
    initial: Option<S>,
    control: Control<S>,
    reducer: Option<StateReducerFn<K, S>>,
    on_change: Option<ChangeNotifier<P>>,
    history_limit: usize,
}

impl<K: TransitionKind, S: State, P> ReducerBuilder<K, S, P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            control: Control::Uncontrolled,
            reducer: None,
            on_change: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the initial internal state (required unless controlled).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Start in controlled mode with a caller-supplied value.
    pub fn controlled(mut self, state: S) -> Self {
        self.control = Control::Controlled(state);
        self
    }

    /// Add a transition override (optional).
    pub fn reducer<F>(mut self, reducer: F) -> Self
    where
        F: Fn(K, S, &S) -> S + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Add a change notifier (optional).
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: FnMut(&P) + 'static,
    {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Keep at most `limit` applied transitions in the engine history.
    /// Zero turns recording off.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the engine.
    ///
    /// A controlled builder without an explicit initial state seeds the
    /// internal state from the controlled value.
    pub fn build(self) -> Result<StateReducerEngine<K, S, P>, BuildError> {
        let initial = self
            .initial
            .or_else(|| self.control.value().cloned())
            .ok_or(BuildError::MissingInitialState)?;

        Ok(StateReducerEngine::from_parts(
            initial,
            self.control,
            self.reducer,
            self.on_change,
            self.history_limit,
        ))
    }
}

impl<K: TransitionKind, S: State, P> Default for ReducerBuilder<K, S, P> {
    fn default() -> Self {
        Self::new()
    }
}
