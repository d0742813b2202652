//! The cycle engine: owner of the active palette member.

use crate::core::{Palette, StateHistory};
use crate::engine::transition::{CycleChange, Move};
use chrono::Utc;

/// Transitions an engine keeps unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// State machine over a fixed palette.
///
/// Holds the active member, the sequence number of the last operation and a
/// history of transitions. Every operation succeeds and returns the
/// [`CycleChange`] it produced.
///
/// # Example
///
/// ```rust
/// use ledlab::engine::CycleEngine;
/// use ledlab::Led;
///
/// let mut engine = CycleEngine::<Led>::new();
/// assert_eq!(engine.active(), Led::Red);
///
/// let change = engine.advance();
/// assert_eq!(change.to, Led::Yellow);
/// assert_eq!(change.seq, 1);
///
/// engine.retreat();
/// engine.retreat();
/// assert_eq!(engine.active(), Led::Green);
///
/// engine.reset();
/// assert_eq!(engine.active(), Led::Red);
/// assert_eq!(engine.seq(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct CycleEngine<P: Palette> {
    active: P,
    seq: u64,
    history: StateHistory<P>,
}

impl<P: Palette> Default for CycleEngine<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Palette> CycleEngine<P> {
    /// Create an engine on the palette's first member keeping the last
    /// [`DEFAULT_HISTORY_LIMIT`] transitions.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an engine on the palette's first member keeping at most
    /// `limit` transitions.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            active: P::first(),
            seq: 0,
            history: StateHistory::with_limit(limit),
        }
    }

    /// Rebuild an engine from checkpointed parts.
    pub(crate) fn from_parts(active: P, seq: u64, history: StateHistory<P>) -> Self {
        Self {
            active,
            seq,
            history,
        }
    }

    /// Currently active member (pure)
    pub fn active(&self) -> P {
        self.active
    }

    /// Sequence number of the last operation, 0 before any
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn history(&self) -> &StateHistory<P> {
        &self.history
    }

    pub fn advance(&mut self) -> CycleChange<P> {
        self.apply(Move::Advance)
    }

    pub fn retreat(&mut self) -> CycleChange<P> {
        self.apply(Move::Retreat)
    }

    pub fn reset(&mut self) -> CycleChange<P> {
        self.apply(Move::Reset)
    }

    /// Run one move and record it.
    pub fn apply(&mut self, mv: Move) -> CycleChange<P> {
        let from = self.active;
        let to = mv.next_state(from);
        self.seq += 1;

        let change = CycleChange {
            seq: self.seq,
            mv,
            from,
            to,
            timestamp: Utc::now(),
        };

        self.history.push(change.to_transition());
        self.active = to;

        log::debug!(
            "cycle #{}: {} {} -> {}",
            change.seq,
            mv.name(),
            from.name(),
            to.name()
        );

        change
    }
}
