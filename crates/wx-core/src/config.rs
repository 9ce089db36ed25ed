//! Analysis and notification timing configuration

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const PHASE_INTERVAL_ENV: &str = "WX_PHASE_INTERVAL_MS";
pub const TOAST_LIFETIME_ENV: &str = "WX_TOAST_MS";

/// Timing and display limits for an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Pause before each analysis phase (milliseconds)
    pub phase_interval_ms: u64,
    /// How long a notification stays on screen (milliseconds)
    pub toast_lifetime_ms: u64,
    /// Upper bound on devices listed per run
    pub max_listed_devices: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            phase_interval_ms: 1200,
            toast_lifetime_ms: 4000,
            max_listed_devices: 8,
        }
    }
}

impl AnalysisConfig {
    /// Defaults overridden by `WX_PHASE_INTERVAL_MS` and `WX_TOAST_MS`
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(PHASE_INTERVAL_ENV) {
            config.phase_interval_ms = parse_millis(PHASE_INTERVAL_ENV, &value)?;
        }
        if let Some(value) = lookup(TOAST_LIFETIME_ENV) {
            config.toast_lifetime_ms = parse_millis(TOAST_LIFETIME_ENV, &value)?;
        }

        Ok(config)
    }

    pub fn phase_interval(&self) -> Duration {
        Duration::from_millis(self.phase_interval_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }
}

fn parse_millis(key: &str, value: &str) -> CoreResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| CoreError::Config(format!("{} must be a whole number of milliseconds: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.phase_interval(), Duration::from_millis(1200));
        assert_eq!(config.toast_lifetime(), Duration::from_secs(4));
        assert_eq!(config.max_listed_devices, 8);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = AnalysisConfig::from_lookup(|key| match key {
            PHASE_INTERVAL_ENV => Some(" 50 ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.phase_interval_ms, 50);
        assert_eq!(config.toast_lifetime_ms, 4000);
    }

    #[test]
    fn test_invalid_override_is_config_error() {
        let result = AnalysisConfig::from_lookup(|key| match key {
            TOAST_LIFETIME_ENV => Some("soon".to_string()),
            _ => None,
        });

        assert!(matches!(result, Err(CoreError::Config(_))));
    }
}
