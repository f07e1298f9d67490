//! Radio style resolution.
//!
//! Radio marks follow their own tables: the outer ring does not honor
//! `disabled`, and the inner dot shrinks when the radio is checked.

use crate::style::interaction::InteractionState;
use crate::style::label::{self, Alignment, Direction, LabelStyle, Layout};
use crate::style::rules::{always, is_checked, is_error, Paint, Rule, RuleTable};
use crate::style::theme::ThemeTokens;
use serde::{Deserialize, Serialize};

/// Resolved presentation of a single radio.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RadioStyle {
    pub outer_color: Paint,
    /// Width and height of the inner dot.
    pub inner_diameter: String,
    /// Inner dot color while hovered or pressed; `None` keeps the base color.
    pub inner_hover_color: Option<Paint>,
    pub label: LabelStyle,
    pub layout: Layout,
}

/// Orientation of a radio group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupAlign {
    Horizontal,
    #[default]
    Vertical,
}

fn is_checked_or_error(s: &InteractionState) -> bool {
    s.checked || s.error
}

fn is_focused(s: &InteractionState) -> bool {
    s.focused
}

fn is_enabled_unchecked(s: &InteractionState) -> bool {
    !s.disabled && !s.checked
}

fn negative400(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.negative400)
}

fn primary400(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.primary400)
}

fn mono700(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.mono700)
}

fn scale100(_: &InteractionState, t: &ThemeTokens) -> String {
    t.sizing.scale100.clone()
}

fn scale600(_: &InteractionState, t: &ThemeTokens) -> String {
    t.sizing.scale600.clone()
}

fn no_hover(_: &InteractionState, _: &ThemeTokens) -> Option<Paint> {
    None
}

fn mono500_hover(_: &InteractionState, t: &ThemeTokens) -> Option<Paint> {
    Some(Paint::token(&t.colors.mono500))
}

fn mono400_hover(_: &InteractionState, t: &ThemeTokens) -> Option<Paint> {
    Some(Paint::token(&t.colors.mono400))
}

pub static OUTER_COLOR: RuleTable<Paint> = RuleTable {
    name: "radio-outer-color",
    rules: &[
        Rule {
            name: "error",
            applies: is_error,
            resolve: negative400,
        },
        Rule {
            name: "checked",
            applies: is_checked,
            resolve: primary400,
        },
    ],
    fallback: Rule {
        name: "default",
        applies: always,
        resolve: mono700,
    },
};

pub static INNER_DIAMETER: RuleTable<String> = RuleTable {
    name: "radio-inner-diameter",
    rules: &[Rule {
        name: "checked",
        applies: is_checked,
        resolve: scale100,
    }],
    fallback: Rule {
        name: "default",
        applies: always,
        resolve: scale600,
    },
};

pub static INNER_HOVER_COLOR: RuleTable<Option<Paint>> = RuleTable {
    name: "radio-inner-hover-color",
    rules: &[
        Rule {
            name: "checked-or-error",
            applies: is_checked_or_error,
            resolve: no_hover,
        },
        Rule {
            name: "focused",
            applies: is_focused,
            resolve: mono500_hover,
        },
        Rule {
            name: "enabled-unchecked",
            applies: is_enabled_unchecked,
            resolve: mono400_hover,
        },
    ],
    fallback: Rule {
        name: "none",
        applies: always,
        resolve: no_hover,
    },
};

/// Resolve a radio snapshot. `indeterminate` and `variant` are ignored.
pub fn resolve_radio(state: &InteractionState, theme: &ThemeTokens) -> RadioStyle {
    RadioStyle {
        outer_color: OUTER_COLOR.evaluate(state, theme),
        inner_diameter: INNER_DIAMETER.evaluate(state, theme),
        inner_hover_color: INNER_HOVER_COLOR.evaluate(state, theme),
        label: label::label_style(state, theme),
        layout: Layout {
            direction: label::direction(state.placement),
            align: Alignment::Center,
            cursor: label::cursor(state.disabled),
        },
    }
}

/// Layout of the container holding a group of radios.
pub fn radio_group_layout(align: GroupAlign, disabled: bool) -> Layout {
    let (direction, align) = match align {
        GroupAlign::Horizontal => (Direction::Row, Alignment::Center),
        GroupAlign::Vertical => (Direction::Column, Alignment::Start),
    };
    Layout {
        direction,
        align,
        cursor: label::cursor(disabled),
    }
}
