//! Core error types for tomato-core.
//!
//! Invalid user-entered settings are the only domain error: every other
//! engine operation is total over the defined states. Validation happens
//! when a configuration is applied, so a zero-length shift can never be
//! reached at runtime.

use thiserror::Error;

/// Rejected configuration input. The engine keeps its previous
/// configuration and countdown untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A duration or cycle field did not parse as a whole number.
    #[error("invalid value for '{field}': expected a whole number, got '{input}'")]
    NotANumber { field: &'static str, input: String },

    /// A shift duration of zero minutes.
    #[error("invalid value for '{field}': duration must be at least one minute")]
    ZeroDuration { field: &'static str },

    /// A cycle count of zero.
    #[error("invalid value for 'cycles': cycle count must be at least 1")]
    ZeroCycles,
}
