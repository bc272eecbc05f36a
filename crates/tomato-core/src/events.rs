use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Shift, TimerConfig, TimerState};

/// Every state change in the engine produces an Event.
/// The front end polls for events and renders or serializes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Countdown started (or resumed) for the current shift.
    Started {
        shift: Shift,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// Countdown paused; `remaining_ms` is where a later start resumes.
    Paused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// A shift ran down to zero. Emitted exactly once per boundary; the
    /// front end uses it to play the audible alert. The engine has already
    /// advanced to `next_shift` and stopped.
    ShiftCompleted {
        /// Pomodoro counter value of the shift that just finished.
        completed: u32,
        next_shift: Shift,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// Manual advance to the next shift (engine stopped, new time set).
    ShiftAdvanced {
        pomodoros: u32,
        shift: Shift,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// New configuration accepted; the cycle restarted at pomodoro 1.
    ConfigApplied {
        config: TimerConfig,
        shift: Shift,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// Full state snapshot for display.
    StateSnapshot {
        state: TimerState,
        pomodoros: u32,
        shift: Shift,
        label: String,
        remaining_ms: u64,
        display: String,
        at: DateTime<Utc>,
    },
}
