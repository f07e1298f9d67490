//! Core state types shared by every component.
//!
//! - State shapes via the `State` trait
//! - Bounded history of applied transitions

mod history;
mod state;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::State;
