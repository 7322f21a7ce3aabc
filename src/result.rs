//! Analysis and comparison results
//!
//! Serialized with camelCase keys for hosts speaking JSON. A failed
//! analysis carries only `errorMessage`/`errorKind`; every pattern field
//! is omitted.

use crate::sequence::{Pattern, PatternKind, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Pattern-specific part of a successful analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysis {
    #[serde(flatten)]
    pub pattern: Pattern,
    /// Fixed per-pattern certainty (0-100)
    pub confidence: u8,
    /// Next terms; `[null]` when no pattern was found
    pub predicted_next: Vec<Option<f64>>,
    pub formula_description: String,
    pub explanation: String,
}

/// Outcome of one `analyze` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub success: bool,
    /// Copy of the analyzed terms (empty when the input was not numeric)
    pub sequence: Vec<f64>,
    #[serde(flatten)]
    pub analysis: Option<PatternAnalysis>,
    pub analysis_duration_ms: f64,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ValidationErrorKind>,
}

impl AnalysisResult {
    pub fn success(sequence: Vec<f64>, analysis: PatternAnalysis) -> Self {
        Self {
            success: true,
            sequence,
            analysis: Some(analysis),
            analysis_duration_ms: 0.0,
            timestamp: now_millis(),
            error_message: None,
            error_kind: None,
        }
    }

    pub fn failure(sequence: Vec<f64>, error: &ValidationError) -> Self {
        Self {
            success: false,
            sequence,
            analysis: None,
            analysis_duration_ms: 0.0,
            timestamp: now_millis(),
            error_message: Some(error.to_string()),
            error_kind: Some(error.kind()),
        }
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.analysis.as_ref().map(|a| &a.pattern)
    }

    pub fn pattern_kind(&self) -> Option<PatternKind> {
        self.pattern().map(Pattern::kind)
    }

    pub fn confidence(&self) -> u8 {
        self.analysis.as_ref().map_or(0, |a| a.confidence)
    }

    pub fn predicted_next(&self) -> &[Option<f64>] {
        match &self.analysis {
            Some(analysis) => &analysis.predicted_next,
            None => &[],
        }
    }

    /// Same payload, ignoring `timestamp` and `analysis_duration_ms`
    pub fn same_payload(&self, other: &AnalysisResult) -> bool {
        self.success == other.success
            && self.sequence == other.sequence
            && self.analysis == other.analysis
            && self.error_message == other.error_message
            && self.error_kind == other.error_kind
    }
}

/// Outcome of one `compare` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub result_a: AnalysisResult,
    pub result_b: AnalysisResult,
    pub same_pattern: bool,
    /// 0-100
    pub similarity_score: u8,
}

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arithmetic_result() -> AnalysisResult {
        AnalysisResult::success(
            vec![3.0, 6.0, 9.0, 12.0],
            PatternAnalysis {
                pattern: Pattern::Arithmetic {
                    common_difference: 3.0,
                },
                confidence: 100,
                predicted_next: vec![Some(15.0)],
                formula_description: "a(n) = a(1) + (n - 1) * 3".to_string(),
                explanation: "Each term differs from the previous one by 3.".to_string(),
            },
        )
    }

    #[test]
    fn test_success_json_shape() {
        let json = serde_json::to_value(arithmetic_result()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["pattern"], "arithmetic");
        assert_eq!(json["parameters"]["commonDifference"], 3.0);
        assert_eq!(json["confidence"], 100);
        assert_eq!(json["predictedNext"][0], 15.0);
        assert!(json.get("formulaDescription").is_some());
        assert!(json.get("analysisDurationMs").is_some());
        assert!(json.get("errorMessage").is_none());
    }

    #[test]
    fn test_failure_json_has_no_pattern_fields() {
        let result = AnalysisResult::failure(vec![5.0], &ValidationError::TooShort { len: 1 });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errorKind"], "TooShort");
        assert!(json.get("pattern").is_none());
        assert!(json.get("predictedNext").is_none());
        assert!(json.get("confidence").is_none());
        assert!(json["errorMessage"].as_str().unwrap().contains("at least 2"));
    }

    #[test]
    fn test_unknown_serializes_null_prediction() {
        let result = AnalysisResult::success(
            vec![1.0, 5.0, 2.0],
            PatternAnalysis {
                pattern: Pattern::Unknown,
                confidence: 0,
                predicted_next: vec![None],
                formula_description: String::new(),
                explanation: String::new(),
            },
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["pattern"], "unknown");
        assert!(json["predictedNext"][0].is_null());
    }

    #[test]
    fn test_same_payload_ignores_timing() {
        let a = arithmetic_result();
        let mut b = a.clone();
        b.timestamp += 1000;
        b.analysis_duration_ms = 42.0;
        assert!(a.same_payload(&b));
    }

    #[test]
    fn test_accessors_on_failure() {
        let result = AnalysisResult::failure(vec![], &ValidationError::NotAnArray);
        assert_eq!(result.pattern_kind(), None);
        assert_eq!(result.confidence(), 0);
        assert!(result.predicted_next().is_empty());
    }
}
