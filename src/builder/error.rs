//! Build errors for engine and component builders.

use thiserror::Error;

/// Errors that can occur when building engines and components.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) or .controlled(state) before .build()")]
    MissingInitialState,
}
