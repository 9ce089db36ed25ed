//! JSON report generation

use super::AnalysisSummary;
use crate::{CoreError, CoreResult};

pub fn generate(summary: &AnalysisSummary<'_>) -> CoreResult<String> {
    serde_json::to_string_pretty(summary)
        .map_err(|e| CoreError::Serialization(format!("JSON serialization failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::AnalysisReport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_json_contains_derived_fields() {
        let report = AnalysisReport::generate(&mut StdRng::seed_from_u64(4), 8);
        let json = generate(&AnalysisSummary::new(&report)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["metrics"]["signal_strength"].is_u64());
        assert!(value["health"]["score"].is_f64());
        assert!(value["recommendations"].is_array());
        assert_eq!(value["speed_history"].as_array().unwrap().len(), 24);
        assert!(value["generated_at"].is_string());
    }
}
