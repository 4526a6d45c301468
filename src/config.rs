//! Command-line configuration.
//!
//! Flags are read straight from `std::env::args`:
//!
//! * `--clock=live|once` — refresh the walk-in time every tick, or stamp it
//!   once each time walk-in is selected. Default `live`.
//! * `--no-age-gate` — accept any date of birth and show every field.
//! * `--tick-ms=<n>` — walk-in refresh cadence in milliseconds. Default 1000.

use std::time::Duration;

use crate::error::{AppError, Result};

pub const USAGE: &str = "usage: clinic_desk [--clock=live|once] [--no-age-gate] [--tick-ms=<n>]";

/// How the walk-in appointment time follows the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Re-stamped on every tick while walk-in stays selected.
    Live,
    /// Stamped once per switch into walk-in.
    Once,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub clock: ClockMode,
    pub age_gate: bool,
    pub tick: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clock: ClockMode::Live,
            age_gate: true,
            tick: Duration::from_secs(1),
        }
    }
}

impl AppConfig {
    /// Parse flags (program name already stripped).
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        for arg in args {
            match arg.split_once('=') {
                Some(("--clock", "live")) => config.clock = ClockMode::Live,
                Some(("--clock", "once")) => config.clock = ClockMode::Once,
                Some(("--clock", other)) => {
                    return Err(AppError::Config(format!(
                        "unknown clock mode `{other}` (expected `live` or `once`)"
                    )));
                }
                Some(("--tick-ms", raw)) => {
                    let ms = raw
                        .parse::<u64>()
                        .ok()
                        .filter(|ms| *ms > 0)
                        .ok_or_else(|| {
                            AppError::Config(format!("`--tick-ms` needs a positive integer, got `{raw}`"))
                        })?;
                    config.tick = Duration::from_millis(ms);
                }
                None if arg == "--no-age-gate" => config.age_gate = false,
                _ => return Err(AppError::Config(format!("unrecognised flag `{arg}`"))),
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig> {
        AppConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_flags_gives_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.clock, ClockMode::Live);
        assert!(config.age_gate);
        assert_eq!(config.tick, Duration::from_secs(1));
    }

    #[test]
    fn all_flags_are_applied() {
        let config = parse(&["--clock=once", "--no-age-gate", "--tick-ms=250"]).unwrap();
        assert_eq!(config.clock, ClockMode::Once);
        assert!(!config.age_gate);
        assert_eq!(config.tick, Duration::from_millis(250));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(parse(&["--clock=sometimes"]), Err(AppError::Config(_))));
        assert!(matches!(parse(&["--tick-ms=0"]), Err(AppError::Config(_))));
        assert!(matches!(parse(&["--tick-ms=fast"]), Err(AppError::Config(_))));
        assert!(matches!(parse(&["--verbose"]), Err(AppError::Config(_))));
    }
}
