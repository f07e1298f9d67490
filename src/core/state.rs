//! Core State trait for component state shapes.
//!
//! Every state a [`StateReducerEngine`](crate::reducer::StateReducerEngine)
//! owns must implement this trait. States are plain values: they are
//! compared by value to decide whether a transition changed anything, and
//! serialized when an engine is checkpointed.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for component state shapes.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records and snapshots
/// - `PartialEq`: change detection is value equality
/// - `Debug`: states are logged on dispatch
/// - `Serialize` + `Deserialize`: states are checkpointed
///
/// # Example
///
/// ```rust
/// use controlstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Expanded {
///     open: bool,
/// }
///
/// impl State for Expanded {
///     fn name(&self) -> &str {
///         if self.open {
///             "open"
///         } else {
///             "closed"
///         }
///     }
/// }
///
/// assert_eq!(Expanded { open: true }.name(), "open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short human-readable label for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Selection {
        key: Option<String>,
    }

    impl State for Selection {
        fn name(&self) -> &str {
            self.key.as_deref().unwrap_or("none")
        }
    }

    #[test]
    fn name_reflects_value() {
        let empty = Selection { key: None };
        let set = Selection {
            key: Some("/home".to_string()),
        };

        assert_eq!(empty.name(), "none");
        assert_eq!(set.name(), "/home");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = Selection {
            key: Some("/a".to_string()),
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        let a = Selection {
            key: Some("/a".to_string()),
        };
        let b = a.clone();
        let c = Selection { key: None };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
