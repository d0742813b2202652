//! Ledlab: small, pure state machines for LED panels.
//!
//! The core is a cycle engine over a fixed palette and a tracker that counts
//! cycle changes across unmount/remount. A panel session wires both behind a
//! five-intent interface that any view layer can drive.
//!
//! # Core Concepts
//!
//! - **Palette**: fixed ordered set of states, declared with [`palette_enum!`]
//! - **Engine**: advance / retreat / reset over the palette, one
//!   [`CycleChange`](engine::CycleChange) per operation
//! - **Tracker**: live counter that freezes on unmount and resumes on remount
//! - **Panel**: the session a view talks to, returning a [`PanelSnapshot`]
//!
//! # Example
//!
//! ```rust
//! use ledlab::{Intent, Led, LedPanel};
//!
//! let mut panel = LedPanel::new();
//! panel.dispatch(Intent::Advance);
//! panel.dispatch(Intent::Advance);
//! panel.dispatch(Intent::Disable);
//! panel.dispatch(Intent::Advance);
//! let snapshot = panel.dispatch(Intent::Enable);
//! assert_eq!(snapshot.active, Led::Red);
//! assert_eq!(snapshot.count, 2);
//!
//! let snapshot = panel.dispatch(Intent::Advance);
//! assert_eq!(snapshot.count, 3);
//! ```

pub mod checkpoint;
pub mod clock;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod led;
pub mod panel;
pub mod tracker;

pub use checkpoint::{PanelCheckpoint, CHECKPOINT_VERSION};
pub use clock::{Clock, ClockHandle, ClockReading};
pub use config::{ClockConfig, PanelConfig};
pub use engine::{CycleChange, CycleEngine, CycleObserver, Move};
pub use led::Led;
pub use panel::{Intent, LedPanel, PanelEvent, PanelSnapshot};
pub use tracker::{MountTracker, TrackerState};
