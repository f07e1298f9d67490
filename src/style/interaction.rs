//! Interaction state snapshots fed to the style resolvers.

use serde::{Deserialize, Serialize};

/// Where the label sits relative to the control mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

impl Placement {
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Label stacked above or below the mark.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Which mark a checkbox-family control draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Checkbox,
    Toggle,
}

impl Variant {
    pub const ALL: [Self; 2] = [Self::Checkbox, Self::Toggle];
}

/// Interaction emphasis used to pick from a three-step color ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Active or focused
    Pressed,
    Hovered,
    Rest,
}

/// Pointer and focus events a host forwards to keep flags current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    PointerEnter,
    PointerLeave,
    PointerDown,
    PointerUp,
    Focus,
    Blur,
}

/// Snapshot of a control's interaction flags for one render.
///
/// Every combination is valid input to the resolvers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionState {
    pub disabled: bool,
    pub checked: bool,
    pub indeterminate: bool,
    pub error: bool,
    pub hovered: bool,
    pub focused: bool,
    pub active: bool,
    pub placement: Placement,
    pub variant: Variant,
}

impl InteractionState {
    /// Number of boolean flags.
    pub const FLAG_COUNT: u32 = 7;

    /// Build a snapshot from a bit set of flags.
    ///
    /// Bit 0 is `disabled`, then `checked`, `indeterminate`, `error`,
    /// `hovered`, `focused`, and bit 6 is `active`. Higher bits are ignored.
    pub fn from_flag_bits(bits: u8, placement: Placement, variant: Variant) -> Self {
        let bit = |n: u8| bits & (1 << n) != 0;
        Self {
            disabled: bit(0),
            checked: bit(1),
            indeterminate: bit(2),
            error: bit(3),
            hovered: bit(4),
            focused: bit(5),
            active: bit(6),
            placement,
            variant,
        }
    }

    /// Every flag combination crossed with every placement and variant.
    pub fn all_combinations() -> impl Iterator<Item = Self> {
        let flag_sets = 0..(1u16 << Self::FLAG_COUNT);
        flag_sets.flat_map(|bits| {
            Placement::ALL.into_iter().flat_map(move |placement| {
                Variant::ALL.into_iter().map(move |variant| {
                    // bits < 128
                    Self::from_flag_bits(bits as u8, placement, variant)
                })
            })
        })
    }

    /// Checked or indeterminate: the mark is filled.
    pub fn is_marked(&self) -> bool {
        self.checked || self.indeterminate
    }

    pub fn emphasis(&self) -> Emphasis {
        if self.active || self.focused {
            Emphasis::Pressed
        } else if self.hovered {
            Emphasis::Hovered
        } else {
            Emphasis::Rest
        }
    }

    /// The snapshot after `event`.
    pub fn apply(self, event: InteractionEvent) -> Self {
        match event {
            InteractionEvent::PointerEnter => Self {
                hovered: true,
                ..self
            },
            InteractionEvent::PointerLeave => Self {
                hovered: false,
                active: false,
                ..self
            },
            InteractionEvent::PointerDown => Self {
                active: true,
                ..self
            },
            InteractionEvent::PointerUp => Self {
                active: false,
                ..self
            },
            InteractionEvent::Focus => Self {
                focused: true,
                ..self
            },
            InteractionEvent::Blur => Self {
                focused: false,
                ..self
            },
        }
    }
}
