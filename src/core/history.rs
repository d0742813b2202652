//! Cycle transition history.
//!
//! History values are immutable: `record` returns a new history with the
//! transition appended, leaving the original untouched.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use ledlab::core::StateTransition;
/// use ledlab::Led;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     seq: 1,
///     from: Led::Red,
///     to: Led::Yellow,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Position of the operation that produced this transition, starting at 1
    pub seq: u64,
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether the transition moved to a different state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of state transitions, optionally bounded.
///
/// A bounded history keeps only the most recent `limit` transitions; older
/// entries are evicted first. A limit of zero keeps nothing.
///
/// # Example
///
/// ```rust
/// use ledlab::core::{StateHistory, StateTransition};
/// use ledlab::Led;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition { seq: 1, from: Led::Red, to: Led::Yellow, timestamp: Utc::now() })
///     .record(StateTransition { seq: 2, from: Led::Yellow, to: Led::Green, timestamp: Utc::now() });
///
/// assert_eq!(history.get_path(), vec![&Led::Red, &Led::Yellow, &Led::Green]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that retains at most `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Maximum number of retained transitions, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// ```rust
    /// use ledlab::core::{StateHistory, StateTransition};
    /// use ledlab::Led;
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let next = history.record(StateTransition {
    ///     seq: 1,
    ///     from: Led::Red,
    ///     to: Led::Green,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(next.len(), 1);
    /// assert!(history.is_empty()); // original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append a transition in place, evicting the oldest entries past the
    /// limit. Used by owners that keep a single evolving history.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed by the retained transitions.
    ///
    /// Returns the `from` state of the oldest retained transition, then the
    /// `to` state of each transition in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained transitions.
    ///
    /// `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// The most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
