//! Mount lifecycle tracking.
//!
//! A [`MountTracker`] counts cycle changes while its device is mounted. On
//! unmount it freezes the count; on remount it resumes from the frozen value,
//! so no change is lost and none is invented.

use crate::core::Palette;
use crate::engine::{CycleChange, CycleObserver};
use serde::{Deserialize, Serialize};

/// Plain-data view of a tracker, used in snapshots and checkpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TrackerState<P: Palette> {
    /// Changes counted while enabled
    pub live_count: u64,
    pub enabled: bool,
    /// `live_count` as it was at the most recent `disable()`
    pub frozen_count: u64,
    /// Active member seen in the previous notification
    pub last_seen: P,
}

/// Counter of cycle changes that survives unmount/remount.
///
/// # Example
///
/// ```rust
/// use ledlab::tracker::MountTracker;
/// use ledlab::Led;
///
/// let mut tracker = MountTracker::new(Led::Red);
/// tracker.on_cycle_changed(Led::Yellow);
/// tracker.on_cycle_changed(Led::Green);
///
/// tracker.disable();
/// tracker.on_cycle_changed(Led::Red); // not counted
/// assert_eq!(tracker.display_count(), 2);
///
/// tracker.enable();
/// tracker.on_cycle_changed(Led::Yellow);
/// assert_eq!(tracker.display_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountTracker<P: Palette> {
    live_count: u64,
    enabled: bool,
    frozen_count: u64,
    last_seen: P,
}

impl<P: Palette> MountTracker<P> {
    /// Enabled tracker with zero counts, having last seen `initial`.
    pub fn new(initial: P) -> Self {
        Self {
            live_count: 0,
            enabled: true,
            frozen_count: 0,
            last_seen: initial,
        }
    }

    /// Tracker with zero counts that starts unmounted.
    pub fn disabled(initial: P) -> Self {
        Self {
            enabled: false,
            ..Self::new(initial)
        }
    }

    pub(crate) fn from_state(state: TrackerState<P>) -> Self {
        Self {
            live_count: state.live_count,
            enabled: state.enabled,
            frozen_count: state.frozen_count,
            last_seen: state.last_seen,
        }
    }

    /// Count a change to `new_active`.
    ///
    /// Increments the live count by one only when tracking is enabled and
    /// `new_active` differs from the previously observed value. The observed
    /// value is updated either way.
    pub fn on_cycle_changed(&mut self, new_active: P) {
        if self.enabled && new_active != self.last_seen {
            self.live_count += 1;
        }
        self.last_seen = new_active;
    }

    /// Unmount: snapshot the live count, then stop counting.
    pub fn disable(&mut self) {
        self.frozen_count = self.live_count;
        self.enabled = false;
        log::info!("tracker frozen at {}", self.frozen_count);
    }

    /// Remount: restore the live count from the snapshot, then resume counting.
    ///
    /// Does nothing on a tracker that is already enabled.
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.live_count = self.frozen_count;
        self.enabled = true;
        log::info!("tracker resumed from {}", self.live_count);
    }

    /// The value a view shows: live count while enabled, frozen count while
    /// disabled.
    pub fn display_count(&self) -> u64 {
        if self.enabled {
            self.live_count
        } else {
            self.frozen_count
        }
    }

    pub fn live_count(&self) -> u64 {
        self.live_count
    }

    pub fn frozen_count(&self) -> u64 {
        self.frozen_count
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn last_seen(&self) -> P {
        self.last_seen
    }

    pub fn state(&self) -> TrackerState<P> {
        TrackerState {
            live_count: self.live_count,
            enabled: self.enabled,
            frozen_count: self.frozen_count,
            last_seen: self.last_seen,
        }
    }
}

impl<P: Palette> CycleObserver<P> for MountTracker<P> {
    fn observe(&mut self, change: &CycleChange<P>) {
        let before = self.live_count;
        self.on_cycle_changed(change.to);
        log::trace!(
            "tracker saw #{} ({}), count {} -> {}",
            change.seq,
            change.to.name(),
            before,
            self.live_count
        );
    }
}
