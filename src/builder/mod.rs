//! Builder API for ergonomic engine construction.
//!
//! This module provides a fluent builder for [`StateReducerEngine`] and the
//! [`transition_kinds!`](crate::transition_kinds) macro for declaring
//! transition-kind enums with minimal boilerplate.
//!
//! [`StateReducerEngine`]: crate::reducer::StateReducerEngine

pub mod error;
pub mod macros;
pub mod reducer;

pub use error::BuildError;
pub use reducer::ReducerBuilder;
