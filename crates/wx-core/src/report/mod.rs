//! Report generation

pub mod json;
pub mod text;

use crate::metrics::quality::NetworkHealth;
use crate::recommendations::Recommendation;
use crate::sequencer::AnalysisReport;
use crate::{CoreError, CoreResult};
use serde::Serialize;
use std::str::FromStr;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Text,
}

impl FromStr for ReportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "text" | "txt" => Ok(ReportFormat::Text),
            other => Err(CoreError::Config(format!("unsupported report format: {}", other))),
        }
    }
}

/// A completed run together with everything derived from it
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary<'a> {
    #[serde(flatten)]
    pub report: &'a AnalysisReport,
    pub health: NetworkHealth,
    pub recommendations: Vec<Recommendation>,
}

impl<'a> AnalysisSummary<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self {
            report,
            health: report.health(),
            recommendations: report.recommendations(),
        }
    }
}

/// Generate report in specified format
pub fn generate_report(report: &AnalysisReport, format: ReportFormat) -> CoreResult<String> {
    let summary = AnalysisSummary::new(report);
    match format {
        ReportFormat::Json => json::generate(&summary),
        ReportFormat::Text => text::generate(&summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("html".parse::<ReportFormat>().is_err());
    }
}
