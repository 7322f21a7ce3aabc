//! Parsing of textual sequence input from the command line and batch files
//!
//! Text is never rejected here: anything malformed is handed to the
//! analyzer so it surfaces as a `success: false` result and counts
//! toward the metrics like any other call.

use crate::analyzer::SequenceAnalyzer;
use crate::result::AnalysisResult;
use serde_json::{Number, Value};

/// Sequence as supplied by a host, before validation
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceInput {
    /// Every token parsed as a float (may still be NaN/inf)
    Values(Vec<f64>),
    /// Untyped input: a JSON document, or tokens that were not all numbers
    Json(Value),
}

impl SequenceInput {
    /// Build input from individual tokens such as CLI arguments
    ///
    /// # Example
    /// ```
    /// use seqlens::input::SequenceInput;
    ///
    /// assert_eq!(
    ///     SequenceInput::from_tokens(&["1", "-2.5"]),
    ///     SequenceInput::Values(vec![1.0, -2.5])
    /// );
    /// assert!(matches!(SequenceInput::from_tokens(&["1", "x"]), SequenceInput::Json(_)));
    /// ```
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let parsed: Vec<Option<f64>> = tokens
            .iter()
            .map(|t| t.as_ref().trim().parse::<f64>().ok())
            .collect();

        if parsed.iter().all(Option::is_some) {
            return SequenceInput::Values(parsed.into_iter().flatten().collect());
        }

        let items = tokens
            .iter()
            .zip(parsed)
            .map(|(token, value)| {
                value
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(token.as_ref().to_string()))
            })
            .collect();
        SequenceInput::Json(Value::Array(items))
    }

    /// Parse one line: a JSON document, or comma/whitespace separated tokens
    pub fn from_line(line: &str) -> Self {
        let line = line.trim();
        if line.starts_with(['[', '{', '"']) {
            return match serde_json::from_str::<Value>(line) {
                Ok(value) => SequenceInput::Json(value),
                Err(_) => SequenceInput::Json(Value::String(line.to_string())),
            };
        }

        let tokens: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        Self::from_tokens(&tokens)
    }

    /// Run this input through an analyzer
    pub fn analyze_with(&self, analyzer: &mut SequenceAnalyzer) -> AnalysisResult {
        match self {
            SequenceInput::Values(values) => analyzer.analyze(values),
            SequenceInput::Json(value) => analyzer.analyze_json(value),
        }
    }
}

/// True for lines a batch file should skip
pub fn is_skippable_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}
