//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// Default budget per player, in seconds
pub const DEFAULT_STARTING_SECONDS: f64 = 20.0;

/// Default cadence of the tick driver, in seconds
pub const DEFAULT_TICK_INTERVAL_SECONDS: f64 = 0.1;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "haus-clock")]
#[command(about = "A two-player countdown chess clock with a local HTTP control surface")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the control surface to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Starting time budget per player, in seconds
    #[arg(short, long, default_value_t = DEFAULT_STARTING_SECONDS)]
    pub starting_seconds: f64,

    /// Tick interval of the clock driver, in seconds
    #[arg(short, long, default_value_t = DEFAULT_TICK_INTERVAL_SECONDS)]
    pub tick_interval: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the validated clock configuration from the CLI values
    pub fn clock_config(&self) -> Result<ClockConfig, String> {
        ClockConfig::new(self.starting_seconds, self.tick_interval)
    }
}

/// The two recognized clock options: starting budget and tick cadence.
///
/// Only built through [`ClockConfig::new`] or `Default`, so both durations
/// are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    starting_time: Duration,
    tick_interval: Duration,
}

impl ClockConfig {
    /// Create a clock configuration from values in seconds.
    ///
    /// Both values must be finite and strictly positive.
    pub fn new(starting_seconds: f64, tick_interval_seconds: f64) -> Result<Self, String> {
        Ok(Self {
            starting_time: positive_duration("starting seconds", starting_seconds)?,
            tick_interval: positive_duration("tick interval", tick_interval_seconds)?,
        })
    }

    pub fn starting_time(&self) -> Duration {
        self.starting_time
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn starting_seconds(&self) -> f64 {
        self.starting_time.as_secs_f64()
    }

    pub fn tick_interval_seconds(&self) -> f64 {
        self.tick_interval.as_secs_f64()
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            starting_time: Duration::from_secs(20),
            tick_interval: Duration::from_millis(100),
        }
    }
}

fn positive_duration(name: &str, seconds: f64) -> Result<Duration, String> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("{} must be a positive number of seconds, got {}", name, seconds));
    }

    let duration = Duration::try_from_secs_f64(seconds)
        .map_err(|e| format!("Invalid {}: {}", name, e))?;

    // Sub-nanosecond values round down to nothing
    if duration.is_zero() {
        return Err(format!("{} is too small: {}", name, seconds));
    }

    Ok(duration)
}
