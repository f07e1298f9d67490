//! Checkbox and toggle style resolution.
//!
//! Each visual property is decided by its own precedence table. Tables are
//! public so hosts can ask which rule fired for a given snapshot.

use crate::style::interaction::{InteractionState, Variant};
use crate::style::label::{self, Alignment, LabelStyle, Layout};
use crate::style::rules::{
    always, is_checked, is_disabled, is_error, is_marked, ramp, Paint, Rule, RuleTable,
};
use crate::style::theme::ThemeTokens;
use serde::{Deserialize, Serialize};

/// Glyph drawn inside a checkbox mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    Check,
    Dash,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Justify {
    Start,
    End,
}

/// Track and knob of a toggle-variant control.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToggleStyle {
    pub track_color: Paint,
    pub track_justify: Justify,
    pub knob_color: Paint,
}

/// Resolved presentation of a checkbox-family control.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleOutcome {
    pub border_color: Paint,
    pub background_color: Paint,
    pub glyph: Glyph,
    pub tick_color: Paint,
    pub label: LabelStyle,
    pub layout: Layout,
    /// Present for [`Variant::Toggle`] only.
    pub toggle: Option<ToggleStyle>,
}

/// Names of the rules that produced a [`StyleOutcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleTrace {
    pub border: &'static str,
    pub background: &'static str,
    pub glyph: &'static str,
    pub label: &'static str,
}

fn is_error_marked(s: &InteractionState) -> bool {
    s.error && s.is_marked()
}

fn is_indeterminate(s: &InteractionState) -> bool {
    s.indeterminate
}

fn is_active(s: &InteractionState) -> bool {
    s.active
}

fn is_hovered_or_checked(s: &InteractionState) -> bool {
    s.hovered || s.checked
}

fn tick_fill_disabled(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.tick_fill_disabled)
}

fn transparent(_: &InteractionState, _: &ThemeTokens) -> Paint {
    Paint::Transparent
}

fn negative400(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.negative400)
}

fn tick_border(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.tick_border)
}

fn disabled_fill(s: &InteractionState, t: &ThemeTokens) -> Paint {
    match s.variant {
        Variant::Toggle => Paint::token(&t.colors.slider_track_fill_disabled),
        Variant::Checkbox => Paint::token(&t.colors.tick_fill_disabled),
    }
}

fn negative_strong(s: &InteractionState, t: &ThemeTokens) -> Paint {
    let c = &t.colors;
    ramp(s, [c.negative600.as_str(), c.negative500.as_str(), c.negative400.as_str()])
}

fn negative_soft(s: &InteractionState, t: &ThemeTokens) -> Paint {
    let c = &t.colors;
    ramp(s, [c.negative200.as_str(), c.negative100.as_str(), c.negative50.as_str()])
}

fn primary(s: &InteractionState, t: &ThemeTokens) -> Paint {
    let c = &t.colors;
    ramp(s, [c.primary600.as_str(), c.primary500.as_str(), c.primary400.as_str()])
}

fn resting_fill(s: &InteractionState, t: &ThemeTokens) -> Paint {
    let c = &t.colors;
    match s.variant {
        Variant::Toggle => ramp(
            s,
            [
                c.slider_track_fill_active.as_str(),
                c.slider_track_fill_hover.as_str(),
                c.slider_track_fill.as_str(),
            ],
        ),
        Variant::Checkbox => ramp(
            s,
            [
                c.tick_fill_active.as_str(),
                c.tick_fill_hover.as_str(),
                c.tick_fill.as_str(),
            ],
        ),
    }
}

fn dash(_: &InteractionState, _: &ThemeTokens) -> Glyph {
    Glyph::Dash
}

fn check(_: &InteractionState, _: &ThemeTokens) -> Glyph {
    Glyph::Check
}

fn no_glyph(_: &InteractionState, _: &ThemeTokens) -> Glyph {
    Glyph::None
}

fn mono400(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.mono400)
}

fn mono600(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.mono600)
}

fn primary500(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.primary500)
}

fn primary_base(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.primary)
}

fn tick_mark_fill(_: &InteractionState, t: &ThemeTokens) -> Paint {
    Paint::token(&t.colors.tick_mark_fill)
}

pub static BORDER_COLOR: RuleTable<Paint> = RuleTable {
    name: "border-color",
    rules: &[
        Rule {
            name: "disabled",
            applies: is_disabled,
            resolve: tick_fill_disabled,
        },
        Rule {
            name: "marked",
            applies: is_marked,
            resolve: transparent,
        },
        Rule {
            name: "error",
            applies: is_error,
            resolve: negative400,
        },
    ],
    fallback: Rule {
        name: "default",
        applies: always,
        resolve: tick_border,
    },
};

pub static BACKGROUND_COLOR: RuleTable<Paint> = RuleTable {
    name: "background-color",
    rules: &[
        Rule {
            name: "disabled",
            applies: is_disabled,
            resolve: disabled_fill,
        },
        Rule {
            name: "error-marked",
            applies: is_error_marked,
            resolve: negative_strong,
        },
        Rule {
            name: "error",
            applies: is_error,
            resolve: negative_soft,
        },
        Rule {
            name: "marked",
            applies: is_marked,
            resolve: primary,
        },
    ],
    fallback: Rule {
        name: "default",
        applies: always,
        resolve: resting_fill,
    },
};

/// Indeterminate wins over checked when both are set.
pub static GLYPH: RuleTable<Glyph> = RuleTable {
    name: "glyph",
    rules: &[
        Rule {
            name: "indeterminate",
            applies: is_indeterminate,
            resolve: dash,
        },
        Rule {
            name: "checked",
            applies: is_checked,
            resolve: check,
        },
    ],
    fallback: Rule {
        name: "none",
        applies: always,
        resolve: no_glyph,
    },
};

pub static TICK_COLOR: RuleTable<Paint> = RuleTable {
    name: "tick-color",
    rules: &[Rule {
        name: "disabled",
        applies: is_disabled,
        resolve: mono600,
    }],
    fallback: Rule {
        name: "default",
        applies: always,
        resolve: tick_mark_fill,
    },
};

pub static TOGGLE_KNOB_COLOR: RuleTable<Paint> = RuleTable {
    name: "toggle-knob-color",
    rules: &[
        Rule {
            name: "disabled",
            applies: is_disabled,
            resolve: mono400,
        },
        Rule {
            name: "active",
            applies: is_active,
            resolve: primary500,
        },
        Rule {
            name: "hovered-or-checked",
            applies: is_hovered_or_checked,
            resolve: primary_base,
        },
    ],
    fallback: Rule {
        name: "default",
        applies: always,
        resolve: mono600,
    },
};

/// Resolve a checkbox or toggle snapshot into style tokens.
///
/// # Example
///
/// ```rust
/// use controlstate::style::{resolve, InteractionState, Paint, ThemeTokens};
///
/// let theme = ThemeTokens::default();
/// let state = InteractionState {
///     error: true,
///     hovered: true,
///     ..InteractionState::default()
/// };
///
/// let outcome = resolve(&state, &theme);
/// assert_eq!(outcome.background_color, Paint::token(&theme.colors.negative100));
/// assert_eq!(outcome.border_color, Paint::token(&theme.colors.negative400));
/// ```
pub fn resolve(state: &InteractionState, theme: &ThemeTokens) -> StyleOutcome {
    let background_color = BACKGROUND_COLOR.evaluate(state, theme);

    let toggle = match state.variant {
        Variant::Toggle => Some(ToggleStyle {
            track_color: background_color.clone(),
            track_justify: if state.checked {
                Justify::End
            } else {
                Justify::Start
            },
            knob_color: TOGGLE_KNOB_COLOR.evaluate(state, theme),
        }),
        Variant::Checkbox => None,
    };

    let direction = label::direction(state.placement);
    StyleOutcome {
        border_color: BORDER_COLOR.evaluate(state, theme),
        background_color,
        glyph: GLYPH.evaluate(state, theme),
        tick_color: TICK_COLOR.evaluate(state, theme),
        label: label::label_style(state, theme),
        layout: Layout {
            direction,
            align: if state.placement.is_vertical() {
                Alignment::Center
            } else {
                Alignment::Start
            },
            cursor: label::cursor(state.disabled),
        },
        toggle,
    }
}

/// Which rule decided each main property of `state`.
pub fn explain(state: &InteractionState) -> StyleTrace {
    StyleTrace {
        border: BORDER_COLOR.explain(state),
        background: BACKGROUND_COLOR.explain(state),
        glyph: GLYPH.explain(state),
        label: label::LABEL_COLOR.explain(state),
    }
}
