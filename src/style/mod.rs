//! Interaction-state style resolution for checkbox, toggle, and radio.
//!
//! Resolution is a pure function of an [`InteractionState`] snapshot and a
//! [`ThemeTokens`] set. Nothing is cached; hosts call the resolvers on every
//! render. Each property comes from an ordered [`RuleTable`]: the first rule
//! whose condition holds wins, and `disabled` always sits at the top.

pub mod checkbox;
pub mod interaction;
pub mod label;
pub mod radio;
pub mod rules;
pub mod theme;

pub use checkbox::{explain, resolve, Glyph, Justify, StyleOutcome, StyleTrace, ToggleStyle};
pub use interaction::{Emphasis, InteractionEvent, InteractionState, Placement, Variant};
pub use label::{Alignment, Cursor, Direction, Edge, LabelStyle, Layout, Padding};
pub use radio::{radio_group_layout, resolve_radio, GroupAlign, RadioStyle};
pub use rules::{Paint, Rule, RuleTable};
pub use theme::{ColorTokens, SizingTokens, ThemeTokens};
