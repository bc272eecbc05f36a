mod config;
mod engine;
mod format;
mod shift;

pub use config::TimerConfig;
pub use engine::{TickHandle, TimerEngine, TimerState, TICK_MS};
pub use format::format_ms;
pub use shift::Shift;
