//! State reducer engine.
//!
//! Components never write their state directly. Every event becomes a
//! [`TransitionRequest`]; the engine runs it through the default transition
//! table, hands the result to the caller's override (if any), then stores or
//! merely reports the outcome depending on the [`Control`] mode.
//!
//! # Key Concepts
//!
//! - **Transition kinds**: a small enum per component naming what happened
//! - **Override**: a typed `Fn(kind, default_next, &current) -> next`
//! - **Control**: uncontrolled (engine-owned) or controlled (caller-owned)

mod engine;
mod transition;

pub use engine::{ChangeNotifier, DispatchOutcome, StateReducerEngine};
pub use transition::{Control, StateReducerFn, TransitionKind, TransitionRequest};
