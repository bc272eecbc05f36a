//! Timer configuration.
//!
//! Four user-adjustable values: work, break, and long-break lengths in whole
//! minutes, plus how many work/break pairs make up a cycle. Held in memory
//! only -- settings reset to defaults on process restart.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_work_min() -> u64 {
    25
}
fn default_break_min() -> u64 {
    5
}
fn default_long_break_min() -> u64 {
    25
}
fn default_cycles() -> u32 {
    4
}

/// Shift durations and cycle count.
///
/// Invariant once validated: all durations > 0 and `cycles >= 1`.
/// Mutated only through [`TimerEngine::apply_config`], which validates
/// first, so the engine never holds a zero-length shift.
///
/// [`TimerEngine::apply_config`]: crate::TimerEngine::apply_config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Work shift length in minutes.
    #[serde(default = "default_work_min")]
    pub work_min: u64,
    /// Short break length in minutes.
    #[serde(default = "default_break_min")]
    pub break_min: u64,
    /// Long break length in minutes.
    #[serde(default = "default_long_break_min")]
    pub long_break_min: u64,
    /// Work/break pairs per long break.
    #[serde(default = "default_cycles")]
    pub cycles: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_min: default_work_min(),
            break_min: default_break_min(),
            long_break_min: default_long_break_min(),
            cycles: default_cycles(),
        }
    }
}

impl TimerConfig {
    /// Check the invariant: durations positive, at least one cycle.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.work_min == 0 {
            return Err(ConfigError::ZeroDuration { field: "work" });
        }
        if self.break_min == 0 {
            return Err(ConfigError::ZeroDuration { field: "break" });
        }
        if self.long_break_min == 0 {
            return Err(ConfigError::ZeroDuration { field: "long-break" });
        }
        if self.cycles == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        Ok(())
    }

    /// Build a configuration from user-entered text, the settings-form path.
    ///
    /// Each field must parse as a whole number of minutes (the cycle field
    /// as a count); the result is then validated.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotANumber`] for unparsable input, otherwise whatever
    /// [`validate`](Self::validate) rejects.
    pub fn parse(
        work: &str,
        brk: &str,
        long_break: &str,
        cycles: &str,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            work_min: parse_field("work", work)?,
            break_min: parse_field("break", brk)?,
            long_break_min: parse_field("long-break", long_break)?,
            cycles: parse_count("cycles", cycles)?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_field(field: &'static str, input: &str) -> Result<u64, ConfigError> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::NotANumber {
            field,
            input: input.to_string(),
        })
}

fn parse_count(field: &'static str, input: &str) -> Result<u32, ConfigError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::NotANumber {
            field,
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TimerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.work_min, 25);
        assert_eq!(config.break_min, 5);
        assert_eq!(config.long_break_min, 25);
        assert_eq!(config.cycles, 4);
    }

    #[test]
    fn parse_accepts_whole_minutes() {
        let config = TimerConfig::parse("50", "10", "30", "3").unwrap();
        assert_eq!(config.work_min, 50);
        assert_eq!(config.break_min, 10);
        assert_eq!(config.long_break_min, 30);
        assert_eq!(config.cycles, 3);
    }

    #[test]
    fn parse_trims_whitespace() {
        let config = TimerConfig::parse(" 25 ", "5", "25", "4").unwrap();
        assert_eq!(config.work_min, 25);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let err = TimerConfig::parse("twenty", "5", "25", "4").unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber {
                field: "work",
                input: "twenty".into()
            }
        );
    }

    #[test]
    fn parse_rejects_negative() {
        // u64 parsing refuses a sign, so negatives fail as non-numbers.
        let err = TimerConfig::parse("25", "-5", "25", "4").unwrap_err();
        assert!(matches!(err, ConfigError::NotANumber { field: "break", .. }));
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let err = TimerConfig::parse("25", "5", "0", "4").unwrap_err();
        assert_eq!(err, ConfigError::ZeroDuration { field: "long-break" });
    }

    #[test]
    fn validate_rejects_zero_cycles() {
        let err = TimerConfig::parse("25", "5", "25", "0").unwrap_err();
        assert_eq!(err, ConfigError::ZeroCycles);
    }

    #[test]
    fn config_json_roundtrip() {
        let config = TimerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TimerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: TimerConfig = serde_json::from_str(r#"{"work_min": 50}"#).unwrap();
        assert_eq!(parsed.work_min, 50);
        assert_eq!(parsed.break_min, 5);
        assert_eq!(parsed.cycles, 4);
    }
}
