//! Timer engine implementation.
//!
//! The timer engine is a tick-driven state machine. It does not use
//! internal threads or read the wall clock -- the host schedules `tick()`
//! once per [`TICK_MS`] while the engine is running.
//!
//! ## State Transitions
//!
//! ```text
//! Paused -> Running -> Paused
//! ```
//!
//! A shift boundary (countdown hits zero, a manual `reset()`, or a new
//! configuration) always advances the pomodoro counter, recomputes the
//! shift, and forces the engine back to `Paused`. Nothing restarts
//! automatically; the host decides when to call `start()` again.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::default();
//! engine.start();
//! // Once per second while engine.is_running():
//! engine.tick(); // Returns Some(Event::ShiftCompleted) at a boundary
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::config::TimerConfig;
use super::format::format_ms;
use super::shift::Shift;
use crate::error::ConfigError;
use crate::events::Event;

/// The tick interval. Display accuracy depends on the host honouring it.
pub const TICK_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Paused,
    Running,
}

/// Token for the single scheduled tick.
///
/// Stands in for the host timer's cancellable callback handle: at most one
/// exists at a time, `pause()` discards it, and a new one is only issued
/// when none is outstanding, so a tick can never be double-scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

impl TickHandle {
    /// Opaque identifier, handy for logging.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Shift scheduler and countdown engine.
///
/// Owns all temporal state: the current configuration, the run state, the
/// pomodoro counter, and the remaining time of the current shift. The
/// counter starts at 1 (a work shift) and increments at every boundary;
/// the shift itself is always derived via [`Shift::for_pomodoro`].
#[derive(Debug, Clone)]
pub struct TimerEngine {
    config: TimerConfig,
    state: TimerState,
    pomodoros: u32,
    /// Remaining time in milliseconds. Always within
    /// `[0, current shift length]`.
    remaining_ms: u64,
    pending: Option<TickHandle>,
    handle_seq: u64,
}

impl TimerEngine {
    /// Create an engine with the given configuration.
    ///
    /// Starts paused on pomodoro 1 (a work shift) with the full work
    /// length remaining.
    ///
    /// # Errors
    ///
    /// Rejects an invalid configuration, same rules as
    /// [`apply_config`](Self::apply_config).
    pub fn new(config: TimerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pomodoros = 1;
        let remaining_ms = Shift::for_pomodoro(pomodoros, &config).duration_ms(&config);
        Ok(Self {
            config,
            state: TimerState::Paused,
            pomodoros,
            remaining_ms,
            pending: None,
            handle_seq: 0,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn pomodoros(&self) -> u32 {
        self.pomodoros
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// The current shift, derived from the counter and configuration.
    pub fn shift(&self) -> Shift {
        Shift::for_pomodoro(self.pomodoros, &self.config)
    }

    /// `"WORK"` or `"BREAK"` -- long breaks present as `"BREAK"`.
    pub fn shift_label(&self) -> &'static str {
        self.shift().label()
    }

    /// Formatted remaining time for display.
    pub fn display_text(&self) -> String {
        format_ms(self.remaining_ms)
    }

    /// True while a scheduled tick is outstanding.
    pub fn has_pending_tick(&self) -> bool {
        self.pending.is_some()
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            pomodoros: self.pomodoros,
            shift: self.shift(),
            label: self.shift_label().to_string(),
            remaining_ms: self.remaining_ms,
            display: self.display_text(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start (or resume) the countdown and schedule the first tick.
    ///
    /// Idempotent: returns `None` when already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.state == TimerState::Running {
            return None;
        }
        self.state = TimerState::Running;
        self.schedule_tick();
        Some(Event::Started {
            shift: self.shift(),
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        })
    }

    /// Pause the countdown, cancelling the pending tick.
    ///
    /// Idempotent: returns `None` when already paused. The remaining time
    /// is kept exactly, so a later `start()` resumes without losing or
    /// doubling a decrement.
    pub fn pause(&mut self) -> Option<Event> {
        if self.state == TimerState::Paused {
            return None;
        }
        self.pending = None;
        self.state = TimerState::Paused;
        Some(Event::Paused {
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        })
    }

    /// Consume the pending tick. Call once per elapsed [`TICK_MS`].
    ///
    /// While running: at zero remaining the shift advances and exactly one
    /// [`Event::ShiftCompleted`] is returned (the engine is then paused on
    /// the next shift); otherwise the remaining time drops by one interval
    /// and the next tick is scheduled. Returns `None` when paused -- a tick
    /// that fires after a pause is stale and has no effect.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.pending.take()?;

        if self.remaining_ms == 0 {
            let completed = self.pomodoros;
            self.advance_shift();
            return Some(Event::ShiftCompleted {
                completed,
                next_shift: self.shift(),
                remaining_ms: self.remaining_ms,
                at: Utc::now(),
            });
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(TICK_MS);
        self.schedule_tick();
        None
    }

    /// Stop, advance to the next shift, and set its full time.
    ///
    /// The engine is left paused; the host decides when the next shift
    /// starts.
    pub fn reset(&mut self) -> Event {
        self.advance_shift();
        Event::ShiftAdvanced {
            pomodoros: self.pomodoros,
            shift: self.shift(),
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        }
    }

    /// Validate and apply a new configuration.
    ///
    /// Restarts the cycle from scratch: counter back to pomodoro 1, work
    /// shift, full work length, paused. Any in-progress countdown is
    /// discarded.
    ///
    /// # Errors
    ///
    /// An invalid configuration is rejected whole: the previous
    /// configuration, counter, state, and remaining time stay untouched.
    pub fn apply_config(&mut self, config: TimerConfig) -> Result<Event, ConfigError> {
        config.validate()?;
        self.config = config;
        self.pomodoros = 0;
        self.advance_shift();
        Ok(Event::ConfigApplied {
            config: self.config,
            shift: self.shift(),
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// The shift boundary: stop, bump the counter, recompute shift and
    /// remaining time. Atomic from the host's point of view -- every
    /// observer after this sees the new shift.
    fn advance_shift(&mut self) {
        self.pending = None;
        self.state = TimerState::Paused;
        self.pomodoros += 1;
        self.remaining_ms = self.shift().duration_ms(&self.config);
    }

    fn schedule_tick(&mut self) {
        debug_assert!(self.pending.is_none(), "tick already scheduled");
        self.handle_seq += 1;
        self.pending = Some(TickHandle(self.handle_seq));
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        // Default config is statically valid.
        Self::new(TimerConfig::default()).expect("default config is valid")
    }
}
