//! Human-readable rendering of analysis output

use crate::metrics::MetricsSnapshot;
use crate::result::{AnalysisResult, ComparisonResult};
use crate::sequence::Pattern;

/// Render a number list as `1, 2, 3` (`?` for a missing prediction)
fn format_terms<'a, I>(terms: I) -> String
where
    I: IntoIterator<Item = &'a Option<f64>>,
{
    terms
        .into_iter()
        .map(|t| match t {
            Some(v) => v.to_string(),
            None => "?".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_parameters(pattern: &Pattern) -> Option<String> {
    match pattern {
        Pattern::Arithmetic { common_difference } => {
            Some(format!("common difference = {}", common_difference))
        }
        Pattern::Geometric { common_ratio } => Some(format!("common ratio = {}", common_ratio)),
        Pattern::Polynomial {
            degree,
            constant_difference,
        } => Some(format!(
            "degree = {}, constant difference = {}",
            degree, constant_difference
        )),
        Pattern::Fibonacci | Pattern::Unknown => None,
    }
}

impl AnalysisResult {
    /// Format result as human-readable string
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        let analysis = match (&self.analysis, &self.error_message) {
            (Some(analysis), _) => analysis,
            (None, message) => {
                report.push_str("❌ ANALYSIS FAILED\n");
                if let Some(kind) = &self.error_kind {
                    report.push_str(&format!("Error kind: {:?}\n", kind));
                }
                report.push_str(&format!(
                    "Reason: {}\n",
                    message.as_deref().unwrap_or("unknown error")
                ));
                return report;
            }
        };

        report.push_str(&format!("Sequence: {}\n", format_values(&self.sequence)));
        report.push_str(&format!(
            "Pattern: {} (confidence {}%)\n",
            analysis.pattern.kind(),
            analysis.confidence
        ));
        if let Some(params) = format_parameters(&analysis.pattern) {
            report.push_str(&format!("Parameters: {}\n", params));
        }
        report.push_str(&format!("Formula: {}\n", analysis.formula_description));
        report.push_str(&format!(
            "Next terms: {}\n",
            format_terms(&analysis.predicted_next)
        ));
        report.push_str(&format!("Explanation: {}\n", analysis.explanation));
        report.push_str(&format!(
            "Analysis time: {:.3} ms\n",
            self.analysis_duration_ms
        ));

        report
    }
}

impl ComparisonResult {
    /// Format comparison as human-readable string
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        if self.same_pattern {
            report.push_str("✅ SAME PATTERN\n");
        } else {
            report.push_str("⚠️  DIFFERENT PATTERNS\n");
        }
        report.push_str(&format!("Similarity: {}/100\n", self.similarity_score));

        report.push_str("\n── Sequence A ──\n");
        report.push_str(&self.result_a.to_report_string());
        report.push_str("\n── Sequence B ──\n");
        report.push_str(&self.result_b.to_report_string());

        report
    }
}

impl MetricsSnapshot {
    /// Format metrics as human-readable string
    pub fn to_report_string(&self) -> String {
        format!(
            "📊 Metrics\n  Total analyses: {}\n  Cache hits: {} ({:.1}%)\n  Average duration: {:.3} ms\n  Cache size: {}\n  History size: {}\n",
            self.total_analyses,
            self.cache_hits,
            self.cache_hit_rate() * 100.0,
            self.average_analysis_duration_ms,
            self.cache_size,
            self.history_size
        )
    }
}
