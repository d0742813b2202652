//! The panel session: cycle engine and mount tracker behind one intent API.
//!
//! A view binding sends [`Intent`]s to [`LedPanel::dispatch`] and renders the
//! returned [`PanelSnapshot`], or registers a listener with
//! [`LedPanel::subscribe`] to be told after every dispatch.

use crate::config::PanelConfig;
use crate::core::Palette;
use crate::engine::{CycleChange, CycleEngine, CycleObserver, Move};
use crate::error::ParseIntentError;
use crate::led::Led;
use crate::tracker::MountTracker;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User intent sent from the view to the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Advance,
    Retreat,
    Reset,
    /// Unmount the tracked device
    Disable,
    /// Remount the tracked device
    Enable,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Advance,
        Intent::Retreat,
        Intent::Reset,
        Intent::Disable,
        Intent::Enable,
    ];

    /// The engine move this intent maps to, if it is a cycle intent.
    pub fn as_move(self) -> Option<Move> {
        match self {
            Intent::Advance => Some(Move::Advance),
            Intent::Retreat => Some(Move::Retreat),
            Intent::Reset => Some(Move::Reset),
            Intent::Disable | Intent::Enable => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Intent::Advance => "advance",
            Intent::Retreat => "retreat",
            Intent::Reset => "reset",
            Intent::Disable => "disable",
            Intent::Enable => "enable",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    /// Accepts the intent names plus the panel's button labels
    /// (`next`, `prev`, `unmount`, `mount`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advance" | "next" => Ok(Intent::Advance),
            "retreat" | "prev" => Ok(Intent::Retreat),
            "reset" => Ok(Intent::Reset),
            "disable" | "unmount" => Ok(Intent::Disable),
            "enable" | "mount" => Ok(Intent::Enable),
            _ => Err(ParseIntentError {
                input: s.to_string(),
            }),
        }
    }
}

/// Read-only view of a panel after a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PanelSnapshot<P: Palette> {
    pub active: P,
    /// Live count while enabled, frozen count while disabled
    pub count: u64,
    pub enabled: bool,
}

impl<P: Palette> fmt::Display for PanelSnapshot<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mount = if self.enabled { "mounted" } else { "unmounted" };
        write!(f, "{} | count {} | {}", self.active.name(), self.count, mount)
    }
}

/// What listeners receive after each dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelEvent<P: Palette> {
    pub intent: Intent,
    /// Present for cycle intents
    pub change: Option<CycleChange<P>>,
    pub snapshot: PanelSnapshot<P>,
}

type Listener<P> = Box<dyn FnMut(&PanelEvent<P>) + Send>;

/// A panel session owning one engine and one tracker.
///
/// Each session is independent: two panels never share state.
///
/// # Example
///
/// ```rust
/// use ledlab::{Intent, Led, LedPanel};
///
/// let mut panel = LedPanel::new();
/// panel.dispatch(Intent::Advance);
/// let snapshot = panel.dispatch(Intent::Advance);
/// assert_eq!((snapshot.active, snapshot.count), (Led::Green, 2));
///
/// panel.dispatch(Intent::Disable);
/// let snapshot = panel.dispatch(Intent::Advance);
/// assert_eq!((snapshot.active, snapshot.count, snapshot.enabled), (Led::Red, 2, false));
///
/// panel.dispatch(Intent::Enable);
/// assert_eq!(panel.dispatch(Intent::Advance).count, 3);
/// ```
pub struct LedPanel<P: Palette = Led> {
    engine: CycleEngine<P>,
    tracker: MountTracker<P>,
    listeners: Vec<Listener<P>>,
}

impl LedPanel<Led> {
    /// Red/yellow/green panel with default configuration.
    pub fn new() -> Self {
        Self::with_config(&PanelConfig::default())
    }
}

impl Default for LedPanel<Led> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Palette> LedPanel<P> {
    pub fn with_config(config: &PanelConfig) -> Self {
        let engine = CycleEngine::with_history_limit(config.history_limit);
        let tracker = if config.tracking_on_start {
            MountTracker::new(engine.active())
        } else {
            MountTracker::disabled(engine.active())
        };
        Self::from_parts(engine, tracker)
    }

    pub(crate) fn from_parts(engine: CycleEngine<P>, tracker: MountTracker<P>) -> Self {
        Self {
            engine,
            tracker,
            listeners: Vec::new(),
        }
    }

    /// Register a listener called after every dispatch, in registration order.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&PanelEvent<P>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Apply one intent and return the resulting snapshot.
    ///
    /// Cycle intents run the engine and deliver its change to the tracker;
    /// lifecycle intents run the tracker. Listeners are notified last, once
    /// all state is updated.
    pub fn dispatch(&mut self, intent: Intent) -> PanelSnapshot<P> {
        let change = match intent.as_move() {
            Some(mv) => {
                let change = self.engine.apply(mv);
                self.tracker.observe(&change);
                Some(change)
            }
            None => {
                if intent == Intent::Disable {
                    self.tracker.disable();
                } else {
                    self.tracker.enable();
                }
                None
            }
        };

        let snapshot = self.snapshot();
        log::debug!("dispatch {intent}: {snapshot}");

        if !self.listeners.is_empty() {
            let event = PanelEvent {
                intent,
                change,
                snapshot,
            };
            for listener in &mut self.listeners {
                listener(&event);
            }
        }

        snapshot
    }

    pub fn advance(&mut self) -> PanelSnapshot<P> {
        self.dispatch(Intent::Advance)
    }

    pub fn retreat(&mut self) -> PanelSnapshot<P> {
        self.dispatch(Intent::Retreat)
    }

    pub fn reset(&mut self) -> PanelSnapshot<P> {
        self.dispatch(Intent::Reset)
    }

    pub fn disable(&mut self) -> PanelSnapshot<P> {
        self.dispatch(Intent::Disable)
    }

    pub fn enable(&mut self) -> PanelSnapshot<P> {
        self.dispatch(Intent::Enable)
    }

    pub fn snapshot(&self) -> PanelSnapshot<P> {
        PanelSnapshot {
            active: self.engine.active(),
            count: self.tracker.display_count(),
            enabled: self.tracker.is_enabled(),
        }
    }

    pub fn engine(&self) -> &CycleEngine<P> {
        &self.engine
    }

    pub fn tracker(&self) -> &MountTracker<P> {
        &self.tracker
    }
}

impl<P: Palette> fmt::Debug for LedPanel<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedPanel")
            .field("engine", &self.engine)
            .field("tracker", &self.tracker)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
