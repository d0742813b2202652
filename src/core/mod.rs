//! Core cycle types.
//!
//! - `State`: named, serializable machine values
//! - `Palette`: a fixed ordered cycle of states
//! - `StateHistory`: immutable record of transitions
//!
//! Nothing in this module performs I/O or holds shared state.

pub(crate) mod macros;
mod history;
mod palette;
mod state;

pub use history::{StateHistory, StateTransition};
pub use palette::Palette;
pub use state::State;
