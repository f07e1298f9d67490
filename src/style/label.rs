//! Label and layout resolution shared by checkbox, toggle, and radio.

use crate::style::interaction::{InteractionState, Placement};
use crate::style::rules::{always, is_disabled, Paint, Rule, RuleTable};
use crate::style::theme::ThemeTokens;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Padding applied on a single edge of the label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Padding {
    pub edge: Edge,
    pub size: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelStyle {
    pub color: Paint,
    pub padding: Padding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Row,
    Column,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Start,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cursor {
    Pointer,
    NotAllowed,
}

/// Flex layout of a control root (mark plus label).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout {
    pub direction: Direction,
    pub align: Alignment,
    pub cursor: Cursor,
}

fn foreground_alt(_: &InteractionState, theme: &ThemeTokens) -> Paint {
    Paint::token(&theme.colors.foreground_alt)
}

fn foreground(_: &InteractionState, theme: &ThemeTokens) -> Paint {
    Paint::token(&theme.colors.foreground)
}

pub static LABEL_COLOR: RuleTable<Paint> = RuleTable {
    name: "label-color",
    rules: &[Rule {
        name: "disabled",
        applies: is_disabled,
        resolve: foreground_alt,
    }],
    fallback: Rule {
        name: "default",
        applies: always,
        resolve: foreground,
    },
};

/// Padding goes on the edge facing the mark.
pub fn label_padding(placement: Placement, theme: &ThemeTokens) -> Padding {
    let edge = match placement {
        Placement::Top => Edge::Bottom,
        Placement::Bottom => Edge::Top,
        Placement::Left => Edge::Right,
        Placement::Right => Edge::Left,
    };
    Padding {
        edge,
        size: theme.sizing.scale300.clone(),
    }
}

pub fn label_style(state: &InteractionState, theme: &ThemeTokens) -> LabelStyle {
    LabelStyle {
        color: LABEL_COLOR.evaluate(state, theme),
        padding: label_padding(state.placement, theme),
    }
}

pub(crate) fn cursor(disabled: bool) -> Cursor {
    if disabled {
        Cursor::NotAllowed
    } else {
        Cursor::Pointer
    }
}

pub(crate) fn direction(placement: Placement) -> Direction {
    if placement.is_vertical() {
        Direction::Column
    } else {
        Direction::Row
    }
}
