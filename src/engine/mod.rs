//! The LED cycle engine.
//!
//! A [`CycleEngine`] moves between the members of a [`Palette`](crate::core::Palette)
//! with three operations: advance, retreat and reset. Each operation emits a
//! [`CycleChange`] that [`CycleObserver`]s consume in order.

mod machine;
mod transition;

pub use machine::{CycleEngine, DEFAULT_HISTORY_LIMIT};
pub use transition::{CycleChange, CycleObserver, Move};
