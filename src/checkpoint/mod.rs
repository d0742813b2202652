//! Checkpoint and restore for panel sessions.
//!
//! A checkpoint captures everything a panel needs to continue where it left
//! off: the active member, the operation sequence number, the tracker's
//! counts and the transition history. Listeners are not captured.

use crate::core::{Palette, StateHistory};
use crate::engine::CycleEngine;
use crate::panel::LedPanel;
use crate::tracker::{MountTracker, TrackerState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable capture of a panel session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PanelCheckpoint<P: Palette> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub active: P,

    /// Sequence number of the last engine operation
    pub seq: u64,

    pub tracker: TrackerState<P>,

    pub history: StateHistory<P>,
}

impl<P: Palette> PanelCheckpoint<P> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Compact binary form.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check the checkpoint is internally consistent.
    ///
    /// An unsupported version is reported on its own. Otherwise every
    /// inconsistency found is collected into one
    /// [`CheckpointError::ValidationFailed`].
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let mut problems = Vec::new();

        if self.tracker.last_seen != self.active {
            problems.push(format!(
                "tracker last saw '{}' but active is '{}'",
                self.tracker.last_seen.name(),
                self.active.name()
            ));
        }

        if !self.tracker.enabled && self.tracker.live_count != self.tracker.frozen_count {
            problems.push(format!(
                "disabled tracker has live count {} but frozen count {}",
                self.tracker.live_count, self.tracker.frozen_count
            ));
        }

        // each increment needs an operation behind it
        if self.tracker.live_count > self.seq {
            problems.push(format!(
                "tracker live count {} exceeds {} operations",
                self.tracker.live_count, self.seq
            ));
        }
        if self.tracker.frozen_count > self.seq {
            problems.push(format!(
                "tracker frozen count {} exceeds {} operations",
                self.tracker.frozen_count, self.seq
            ));
        }

        if let Some(last) = self.history.last() {
            if last.to != self.active {
                problems.push(format!(
                    "history ends on '{}' but active is '{}'",
                    last.to.name(),
                    self.active.name()
                ));
            }
            if last.seq > self.seq {
                problems.push(format!(
                    "history reaches seq {} beyond checkpoint seq {}",
                    last.seq, self.seq
                ));
            }
        }

        let out_of_order = self
            .history
            .transitions()
            .windows(2)
            .any(|pair| pair[1].seq <= pair[0].seq);
        if out_of_order {
            problems.push("history sequence numbers are not increasing".to_string());
        }

        let broken = self
            .history
            .transitions()
            .windows(2)
            .any(|pair| pair[0].to != pair[1].from);
        if broken {
            problems.push("history transitions do not chain".to_string());
        }

        if let Some(limit) = self.history.limit() {
            if self.history.len() > limit {
                problems.push(format!(
                    "history holds {} transitions, limit is {}",
                    self.history.len(),
                    limit
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CheckpointError::ValidationFailed(problems))
        }
    }
}

impl<P: Palette> LedPanel<P> {
    /// Capture the session.
    pub fn checkpoint(&self) -> PanelCheckpoint<P> {
        let engine = self.engine();
        PanelCheckpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            active: engine.active(),
            seq: engine.seq(),
            tracker: self.tracker().state(),
            history: engine.history().clone(),
        }
    }

    /// Rebuild a session from a validated checkpoint.
    pub fn restore(checkpoint: PanelCheckpoint<P>) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        let span = checkpoint.history.duration().unwrap_or_default();
        log::info!(
            "restoring checkpoint {} at seq {} ({} transitions over {:?})",
            checkpoint.id,
            checkpoint.seq,
            checkpoint.history.len(),
            span
        );
        let engine = CycleEngine::from_parts(checkpoint.active, checkpoint.seq, checkpoint.history);
        let tracker = MountTracker::from_state(checkpoint.tracker);
        Ok(Self::from_parts(engine, tracker))
    }
}
