use clap::Args;
use tomato_core::{ConfigError, TimerConfig};

/// Duration flags shared by every subcommand.
///
/// Values are taken as text and parsed by the core, so bad input fails the
/// same way a settings form would: a configuration error, not a panic.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Work shift length in minutes
    #[arg(long, default_value = "25")]
    pub work: String,

    /// Break length in minutes
    #[arg(long = "break", default_value = "5")]
    pub break_min: String,

    /// Long break length in minutes
    #[arg(long, default_value = "25")]
    pub long_break: String,

    /// Work/break pairs per long break
    #[arg(long, default_value = "4")]
    pub cycles: String,
}

impl ConfigArgs {
    pub fn to_config(&self) -> Result<TimerConfig, ConfigError> {
        TimerConfig::parse(&self.work, &self.break_min, &self.long_break, &self.cycles)
    }
}
