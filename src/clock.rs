//! Digital clock with mount/unmount lifecycle.
//!
//! Mounting starts a repeating timer on the tokio runtime. Unmounting, either
//! explicitly or by dropping the handle, stops the timer and runs the unmount
//! callback. The callback runs exactly once.

use crate::config::ClockConfig;
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const FALLBACK_FORMAT: &str = "%H:%M:%S";

/// One clock sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockReading {
    /// Ticks since mount; the reading taken at mount is tick 0
    pub ticks: u64,
    pub at: DateTime<Local>,
}

type UnmountCallback = Box<dyn FnOnce(String) + Send>;

pub struct Clock;

impl Clock {
    /// Start the clock.
    ///
    /// `on_unmount` receives `"clock unmounted at <time>"` when the returned
    /// handle is unmounted or dropped.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<F>(config: &ClockConfig, on_unmount: F) -> ClockHandle
    where
        F: FnOnce(String) + Send + 'static,
    {
        let period = config.tick().max(Duration::from_millis(1));
        let (tx, rx) = watch::channel(ClockReading {
            ticks: 0,
            at: Local::now(),
        });

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // first tick is immediate and already covered by the mount reading
            interval.tick().await;

            let mut ticks = 0;
            loop {
                interval.tick().await;
                ticks += 1;
                let reading = ClockReading {
                    ticks,
                    at: Local::now(),
                };
                if tx.send(reading).is_err() {
                    break;
                }
            }
        });

        log::info!("clock mounted, ticking every {period:?}");

        ClockHandle {
            readings: rx,
            task,
            format: config.format.clone(),
            on_unmount: Some(Box::new(on_unmount)),
        }
    }
}

/// A mounted clock.
pub struct ClockHandle {
    readings: watch::Receiver<ClockReading>,
    task: JoinHandle<()>,
    format: String,
    on_unmount: Option<UnmountCallback>,
}

impl ClockHandle {
    /// Latest reading.
    pub fn reading(&self) -> ClockReading {
        *self.readings.borrow()
    }

    /// Receiver that is notified on every tick. Closed once the clock stops.
    pub fn subscribe(&self) -> watch::Receiver<ClockReading> {
        self.readings.clone()
    }

    /// Latest reading formatted with the configured format.
    pub fn display(&self) -> String {
        format_time(&self.reading().at, &self.format)
    }

    /// Stop the clock and run the unmount callback.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let Some(on_unmount) = self.on_unmount.take() else {
            return;
        };
        self.task.abort();
        let message = format!(
            "clock unmounted at {}",
            format_time(&Local::now(), &self.format)
        );
        log::info!("{message}");
        on_unmount(message);
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Format `at` with a strftime pattern, falling back to `%H:%M:%S` when the
/// pattern is invalid.
pub fn format_time(at: &DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_ok() {
        return out;
    }
    log::warn!("invalid clock format {format:?}, using {FALLBACK_FORMAT}");
    at.format(FALLBACK_FORMAT).to_string()
}
