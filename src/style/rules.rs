//! Ordered precedence tables.
//!
//! A [`RuleTable`] is a list of named rules evaluated top to bottom; the
//! first rule whose condition holds produces the value. A fallback rule
//! closes every table, so evaluation is total.

use crate::style::interaction::InteractionState;
use crate::style::theme::ThemeTokens;
use serde::{Deserialize, Serialize};

/// A resolved color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paint {
    Transparent,
    Token(String),
}

impl Paint {
    pub fn token(value: &str) -> Self {
        Self::Token(value.to_string())
    }

    /// CSS-style text for the color.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Transparent => "transparent",
            Self::Token(value) => value,
        }
    }
}

/// One row of a precedence table.
pub struct Rule<T> {
    pub name: &'static str,
    pub applies: fn(&InteractionState) -> bool,
    pub resolve: fn(&InteractionState, &ThemeTokens) -> T,
}

/// Ordered rules plus the fallback used when none applies.
pub struct RuleTable<T: 'static> {
    pub name: &'static str,
    pub rules: &'static [Rule<T>],
    pub fallback: Rule<T>,
}

impl<T> RuleTable<T> {
    /// The first rule that applies, or the fallback.
    pub fn select(&self, state: &InteractionState) -> &Rule<T> {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(state))
            .unwrap_or(&self.fallback)
    }

    pub fn evaluate(&self, state: &InteractionState, theme: &ThemeTokens) -> T {
        (self.select(state).resolve)(state, theme)
    }

    /// Name of the rule that decides `state`.
    pub fn explain(&self, state: &InteractionState) -> &'static str {
        self.select(state).name
    }
}

// Conditions shared by several tables.

pub(crate) fn always(_: &InteractionState) -> bool {
    true
}

pub(crate) fn is_disabled(s: &InteractionState) -> bool {
    s.disabled
}

pub(crate) fn is_checked(s: &InteractionState) -> bool {
    s.checked
}

pub(crate) fn is_error(s: &InteractionState) -> bool {
    s.error
}

pub(crate) fn is_marked(s: &InteractionState) -> bool {
    s.is_marked()
}

/// Pick from a `[pressed, hovered, rest]` ramp by emphasis.
pub(crate) fn ramp(s: &InteractionState, [pressed, hovered, rest]: [&str; 3]) -> Paint {
    use crate::style::interaction::Emphasis;
    match s.emphasis() {
        Emphasis::Pressed => Paint::token(pressed),
        Emphasis::Hovered => Paint::token(hovered),
        Emphasis::Rest => Paint::token(rest),
    }
}
