use serde::{Deserialize, Serialize};

use super::config::TimerConfig;

/// The current shift. Derived from the pomodoro counter and configuration,
/// never stored -- recomputed at every shift boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Work,
    Break,
    LongBreak,
}

impl Shift {
    /// Derive the shift for a pomodoro counter value.
    ///
    /// Odd counts are work shifts. Even counts are breaks; among breaks,
    /// exact divisibility by `cycles * 2` selects the long break. The
    /// parity rule is load-bearing: an off-by-one here silently moves
    /// every long break.
    pub fn for_pomodoro(pomodoros: u32, config: &TimerConfig) -> Self {
        if pomodoros % 2 == 0 {
            if pomodoros % (config.cycles.saturating_mul(2)) == 0 {
                Shift::LongBreak
            } else {
                Shift::Break
            }
        } else {
            Shift::Work
        }
    }

    /// Configured length of this shift in minutes.
    pub fn duration_min(self, config: &TimerConfig) -> u64 {
        match self {
            Shift::Work => config.work_min,
            Shift::Break => config.break_min,
            Shift::LongBreak => config.long_break_min,
        }
    }

    /// Configured length of this shift in milliseconds.
    ///
    /// Saturating to protect against absurdly large configured minutes.
    pub fn duration_ms(self, config: &TimerConfig) -> u64 {
        self.duration_min(config).saturating_mul(60_000)
    }

    /// Display label. Long breaks present identically to short breaks.
    pub fn label(self) -> &'static str {
        match self {
            Shift::Work => "WORK",
            Shift::Break | Shift::LongBreak => "BREAK",
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, Shift::Work)
    }
}
