//! Cycle moves and the change notifications they produce.

use crate::core::{Palette, StateTransition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the three operations a cycle engine accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Step to the next palette member, wrapping last → first
    Advance,
    /// Step to the previous palette member, wrapping first → last
    Retreat,
    /// Jump back to the first palette member
    Reset,
}

impl Move {
    /// The pure transition function: where this move takes `from`.
    ///
    /// ```rust
    /// use ledlab::engine::Move;
    /// use ledlab::Led;
    ///
    /// assert_eq!(Move::Advance.next_state(Led::Green), Led::Red);
    /// assert_eq!(Move::Retreat.next_state(Led::Red), Led::Green);
    /// assert_eq!(Move::Reset.next_state(Led::Yellow), Led::Red);
    /// ```
    pub fn next_state<P: Palette>(self, from: P) -> P {
        match self {
            Move::Advance => from.successor(),
            Move::Retreat => from.predecessor(),
            Move::Reset => P::first(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Advance => "advance",
            Move::Retreat => "retreat",
            Move::Reset => "reset",
        }
    }
}

/// Notification emitted by every engine operation.
///
/// `seq` starts at 1 and grows by exactly one per operation, so consumers can
/// detect a skipped or duplicated notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct CycleChange<P: Palette> {
    pub seq: u64,
    #[serde(rename = "move")]
    pub mv: Move,
    pub from: P,
    pub to: P,
    pub timestamp: DateTime<Utc>,
}

impl<P: Palette> CycleChange<P> {
    /// Whether the operation left a different member active.
    ///
    /// A reset from the first member is the only operation on a palette of
    /// two or more members that does not change the active value.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// History record for this change.
    pub fn to_transition(&self) -> StateTransition<P> {
        StateTransition {
            seq: self.seq,
            from: self.from,
            to: self.to,
            timestamp: self.timestamp,
        }
    }
}

/// Consumer of cycle change notifications.
///
/// Observers are called synchronously, once per engine operation, in the order
/// the operations ran.
pub trait CycleObserver<P: Palette> {
    fn observe(&mut self, change: &CycleChange<P>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::led::Led;

    #[test]
    fn advance_and_retreat_are_inverse() {
        for &led in Led::ALL {
            assert_eq!(Move::Retreat.next_state(Move::Advance.next_state(led)), led);
            assert_eq!(Move::Advance.next_state(Move::Retreat.next_state(led)), led);
        }
    }

    #[test]
    fn reset_always_returns_first() {
        for &led in Led::ALL {
            assert_eq!(Move::Reset.next_state(led), Led::Red);
        }
    }

    #[test]
    fn change_maps_to_transition() {
        let change = CycleChange {
            seq: 4,
            mv: Move::Advance,
            from: Led::Yellow,
            to: Led::Green,
            timestamp: Utc::now(),
        };

        let transition = change.to_transition();
        assert_eq!(transition.seq, 4);
        assert_eq!(transition.from, Led::Yellow);
        assert_eq!(transition.to, Led::Green);
        assert!(change.changed());
    }

    #[test]
    fn move_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Retreat).unwrap(), "\"retreat\"");
        assert_eq!(Move::Reset.name(), "reset");
    }
}
