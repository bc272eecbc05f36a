//! # Tomato Core Library
//!
//! Core logic for the Tomato Pomodoro timer: a shift-scheduling state
//! machine and countdown engine. The presentation layer (CLI, or any GUI
//! built on top) is a thin shell that drives the engine through a narrow
//! interface -- start, pause, reset, apply a configuration, and a periodic
//! `tick()`.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine. It never spawns threads;
//!   the caller schedules `tick()` once per second and the engine tracks the
//!   single pending tick via a cancellable [`TickHandle`]
//! - **Shift derivation**: the current shift (work, break, long break) is
//!   computed from the pomodoro counter and configuration, never stored
//! - **Events**: every state change produces an [`Event`] the front end can
//!   render or serialize
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: the state machine and countdown
//! - [`TimerConfig`]: validated shift durations and cycle count
//! - [`Shift`]: derived work/break/long-break phase
//! - [`ConfigError`]: the only domain error -- invalid user-entered settings

pub mod error;
pub mod events;
pub mod timer;

pub use error::ConfigError;
pub use events::Event;
pub use timer::{format_ms, Shift, TickHandle, TimerConfig, TimerEngine, TimerState, TICK_MS};
