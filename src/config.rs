//! Loading caller configuration (themes, navigation trees) from JSON.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while reading caller-supplied configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input was not valid JSON for the expected shape
    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn from_json<T: DeserializeOwned>(what: &'static str, input: &str) -> Result<T, ConfigError> {
    serde_json::from_str(input).map_err(|source| ConfigError::Parse { what, source })
}
