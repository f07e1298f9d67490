//! Engine snapshots.
//!
//! A snapshot captures the authoritative state and the applied-transition
//! history of a [`StateReducerEngine`]. Overrides and notifiers are code and
//! are not captured; re-install them on the engine you restore into.

use crate::core::{State, StateHistory};
use crate::reducer::{StateReducerEngine, TransitionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an engine.
///
/// # Example
///
/// ```rust
/// use controlstate::checkpoint::EngineSnapshot;
/// use controlstate::nav::{NavState, NavTransition};
/// use controlstate::reducer::{StateReducerEngine, TransitionRequest};
///
/// let mut engine: StateReducerEngine<NavTransition, NavState> =
///     StateReducerEngine::new(NavState::default());
/// engine.dispatch(TransitionRequest::item_select(Some("/a".to_string())), &());
///
/// let json = EngineSnapshot::capture(&engine).to_json().unwrap();
///
/// let mut fresh: StateReducerEngine<NavTransition, NavState> =
///     StateReducerEngine::new(NavState::default());
/// EngineSnapshot::<NavState>::from_json(&json).unwrap().restore(&mut fresh);
///
/// assert_eq!(fresh.current_state(), &NavState::at("/a"));
/// assert_eq!(fresh.history().len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EngineSnapshot<S: State> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Authoritative state at capture time
    pub state: S,

    /// Applied transitions up to capture time
    pub history: StateHistory<S>,
}

impl<S: State> EngineSnapshot<S> {
    /// Capture the current state and history of `engine`.
    ///
    /// In controlled mode the captured state is the caller's value.
    pub fn capture<K: TransitionKind, P>(engine: &StateReducerEngine<K, S, P>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: engine.current_state().clone(),
            history: engine.history().clone(),
        }
    }

    /// Load state and history into `engine`'s internal storage.
    ///
    /// The control mode, override and notifier of `engine` are untouched.
    pub fn restore<K: TransitionKind, P>(self, engine: &mut StateReducerEngine<K, S, P>) {
        engine.restore(self.state, self.history);
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(input: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(input)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != CHECKPOINT_VERSION {
            warn!(
                found = self.version,
                supported = CHECKPOINT_VERSION,
                id = %self.id,
                "rejected snapshot"
            );
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{CheckedState, CheckedTransition};
    use crate::reducer::{Control, TransitionRequest};

    fn engine_with_history() -> StateReducerEngine<CheckedTransition, CheckedState> {
        let mut engine = StateReducerEngine::new(CheckedState::unchecked());
        for checked in [true, false, true] {
            engine.dispatch(
                TransitionRequest::new(
                    CheckedTransition::Change,
                    CheckedState {
                        checked,
                        indeterminate: false,
                    },
                ),
                &(),
            );
        }
        engine
    }

    #[test]
    fn json_snapshot_restores_state_and_history() {
        let engine = engine_with_history();
        let json = EngineSnapshot::capture(&engine).to_json().unwrap();

        let mut restored: StateReducerEngine<CheckedTransition, CheckedState> =
            StateReducerEngine::new(CheckedState::unchecked());
        EngineSnapshot::<CheckedState>::from_json(&json)
            .unwrap()
            .restore(&mut restored);

        assert_eq!(restored.current_state(), &CheckedState::checked());
        assert_eq!(restored.history().len(), 3);
        let targets = |e: &StateReducerEngine<CheckedTransition, CheckedState>| {
            e.history().transitions().map(|t| t.to.clone()).collect::<Vec<_>>()
        };
        assert_eq!(targets(&restored), targets(&engine));
    }

    #[test]
    fn restore_keeps_target_history_limit() {
        let json = EngineSnapshot::capture(&engine_with_history()).to_json().unwrap();

        let mut restored: StateReducerEngine<CheckedTransition, CheckedState> =
            StateReducerEngine::new(CheckedState::unchecked());
        restored.set_history_limit(2);
        EngineSnapshot::<CheckedState>::from_json(&json)
            .unwrap()
            .restore(&mut restored);

        assert_eq!(restored.history().limit(), 2);
        assert_eq!(restored.history().len(), 2);
    }

    #[test]
    fn binary_snapshot_round_trips() {
        let engine = engine_with_history();
        let snapshot = EngineSnapshot::capture(&engine);
        let bytes = snapshot.to_bytes().unwrap();

        let decoded = EngineSnapshot::<CheckedState>::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.id, snapshot.id);
        assert_eq!(decoded.state, CheckedState::checked());
        assert_eq!(decoded.history.len(), 3);
    }

    #[test]
    fn snapshot_ids_are_unique() {
        let engine = engine_with_history();
        let a = EngineSnapshot::capture(&engine);
        let b = EngineSnapshot::capture(&engine);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn controlled_capture_uses_caller_value() {
        let mut engine = engine_with_history();
        engine.set_control(Control::Controlled(CheckedState::indeterminate()));

        let snapshot = EngineSnapshot::capture(&engine);
        assert_eq!(snapshot.state, CheckedState::indeterminate());
    }

    #[test]
    fn future_version_is_rejected() {
        let mut snapshot = EngineSnapshot::capture(&engine_with_history());
        snapshot.version = CHECKPOINT_VERSION + 1;
        let json = snapshot.to_json().unwrap();

        let result = EngineSnapshot::<CheckedState>::from_json(&json);
        assert!(matches!(
            result,
            Err(SnapshotError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn garbage_input_is_a_deserialization_error() {
        assert!(matches!(
            EngineSnapshot::<CheckedState>::from_json("{"),
            Err(SnapshotError::DeserializationFailed(_))
        ));
        assert!(matches!(
            EngineSnapshot::<CheckedState>::from_bytes(&[1, 2]),
            Err(SnapshotError::DeserializationFailed(_))
        ));
    }
}
