//! Reducer-backed checkbox and toggle.
//!
//! A [`StatefulCheckbox`] keeps the checked value in a
//! [`StateReducerEngine`] and tracks pointer/focus flags locally, so a host
//! only forwards events and asks for the current [`StyleOutcome`].

use crate::core::State;
use crate::reducer::{DispatchOutcome, StateReducerEngine, TransitionRequest};
use crate::style::{
    self, InteractionEvent, InteractionState, Placement, StyleOutcome, ThemeTokens, Variant,
};
use serde::{Deserialize, Serialize};

crate::transition_kinds! {
    /// Transitions of a checkbox-family control.
    pub enum CheckedTransition {
        Change => "change",
    }
}

/// Value state of a checkbox or toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckedState {
    pub checked: bool,
    pub indeterminate: bool,
}

impl CheckedState {
    pub fn checked() -> Self {
        Self {
            checked: true,
            indeterminate: false,
        }
    }

    pub fn unchecked() -> Self {
        Self::default()
    }

    pub fn indeterminate() -> Self {
        Self {
            checked: false,
            indeterminate: true,
        }
    }
}

impl State for CheckedState {
    fn name(&self) -> &str {
        if self.indeterminate {
            "indeterminate"
        } else if self.checked {
            "checked"
        } else {
            "unchecked"
        }
    }
}

/// Payload handed to the change notifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Value the user asked for
    pub checked: bool,
}

/// Checkbox or toggle with reducer-managed value and local interaction flags.
///
/// # Example
///
/// ```rust
/// use controlstate::builder::ReducerBuilder;
/// use controlstate::controls::{CheckedState, StatefulCheckbox};
/// use controlstate::style::{Paint, ThemeTokens};
///
/// let engine = ReducerBuilder::new()
///     .initial(CheckedState::unchecked())
///     .build()
///     .unwrap();
/// let mut checkbox = StatefulCheckbox::new(engine);
///
/// checkbox.toggle();
///
/// let theme = ThemeTokens::default();
/// assert!(checkbox.state().checked);
/// assert_eq!(checkbox.style(&theme).border_color, Paint::Transparent);
/// ```
pub struct StatefulCheckbox {
    engine: StateReducerEngine<CheckedTransition, CheckedState, ChangeEvent>,
    flags: InteractionState,
}

impl StatefulCheckbox {
    pub fn new(engine: StateReducerEngine<CheckedTransition, CheckedState, ChangeEvent>) -> Self {
        Self {
            engine,
            flags: InteractionState::default(),
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.flags.variant = variant;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.flags.placement = placement;
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.flags.disabled = disabled;
    }

    pub fn set_error(&mut self, error: bool) {
        self.flags.error = error;
    }

    pub fn engine(&self) -> &StateReducerEngine<CheckedTransition, CheckedState, ChangeEvent> {
        &self.engine
    }

    /// Mutable access, e.g. to supply the controlled value each cycle.
    pub fn engine_mut(
        &mut self,
    ) -> &mut StateReducerEngine<CheckedTransition, CheckedState, ChangeEvent> {
        &mut self.engine
    }

    pub fn state(&self) -> &CheckedState {
        self.engine.current_state()
    }

    /// Flip the value. Disabled controls ignore the request.
    ///
    /// A user toggle always clears `indeterminate`.
    pub fn toggle(&mut self) -> Option<DispatchOutcome<CheckedState>> {
        if self.flags.disabled {
            return None;
        }
        let checked = !self.state().checked;
        let request = TransitionRequest::new(
            CheckedTransition::Change,
            CheckedState {
                checked,
                indeterminate: false,
            },
        );
        Some(self.engine.dispatch(request, &ChangeEvent { checked }))
    }

    /// Update hover/press/focus flags.
    pub fn handle(&mut self, event: InteractionEvent) {
        self.flags = self.flags.apply(event);
    }

    /// Snapshot combining the local flags with the authoritative value.
    pub fn interaction(&self) -> InteractionState {
        let value = self.state();
        InteractionState {
            checked: value.checked,
            indeterminate: value.indeterminate,
            ..self.flags
        }
    }

    pub fn style(&self, theme: &ThemeTokens) -> StyleOutcome {
        style::resolve(&self.interaction(), theme)
    }
}
