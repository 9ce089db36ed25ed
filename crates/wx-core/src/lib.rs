//! Wi-Fi Extender Pro Core
//!
//! This crate holds everything the site and the CLI share: the mock network
//! analysis sequencer, metric classification, optimization advice, and the
//! static support and product content.

pub mod catalog;
pub mod config;
pub mod metrics;
pub mod recommendations;
pub mod report;
pub mod sequencer;
pub mod support;

use thiserror::Error;

pub use config::AnalysisConfig;
pub use metrics::quality::{HealthTier, NetworkHealth, SignalQuality, SpeedQuality, Tone};
pub use metrics::{DeviceInfo, DeviceKind, FrequencyBand, NetworkMetrics, SecurityType, SpeedSample};
pub use recommendations::{Advisory, Priority, Recommendation};
pub use sequencer::{AnalysisPhase, AnalysisReport, AnalysisSequencer, Notice, NoticeLevel, Notifier};
pub use support::{CategoryFilter, FaqCategory, FaqEntry};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::UnknownCategory("billing".into()).to_string(),
            "Unknown category: billing"
        );
        assert_eq!(
            CoreError::AnalysisInProgress.to_string(),
            "An analysis is already in progress"
        );
    }
}
