//! Sequence analyzer: detection pipeline plus cache, history and metrics
//!
//! Control flow for one call:
//!   canonical key -> cache lookup -> validate -> detect -> predict
//!   -> metrics -> cache write -> history append
//!
//! Each `SequenceAnalyzer` owns its state exclusively; independent
//! instances never share anything. `SharedAnalyzer` puts one instance
//! behind a single mutex for concurrent hosts.

use crate::cache::{canonical_key, ResultCache};
use crate::config::AnalyzerConfig;
use crate::metrics::{AnalysisMetrics, MetricsSnapshot};
use crate::result::{AnalysisResult, ComparisonResult, PatternAnalysis};
use crate::sequence::{
    detect_pattern, explanation, formula_description, predict_next, same_pattern,
    similarity_score, validate, validate_json,
};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Single-threaded analysis engine
#[derive(Debug)]
pub struct SequenceAnalyzer {
    config: AnalyzerConfig,
    cache: ResultCache,
    history: Vec<AnalysisResult>,
    metrics: AnalysisMetrics,
}

impl Default for SequenceAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl SequenceAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            cache: ResultCache::new(config.cache_capacity),
            config,
            history: Vec::new(),
            metrics: AnalysisMetrics::new(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Identify the generating rule of `sequence` and predict what follows
    ///
    /// Invalid input yields a `success: false` result; it is counted in the
    /// metrics but neither cached nor recorded in history. Repeated calls
    /// with an identical sequence return the cached result unchanged.
    ///
    /// # Example
    /// ```
    /// use seqlens::analyzer::SequenceAnalyzer;
    /// use seqlens::sequence::PatternKind;
    ///
    /// let mut analyzer = SequenceAnalyzer::default();
    /// let result = analyzer.analyze(&[1.0, 4.0, 9.0, 16.0, 25.0]);
    /// assert_eq!(result.pattern_kind(), Some(PatternKind::Polynomial));
    /// assert_eq!(result.predicted_next()[0], Some(36.0));
    /// ```
    pub fn analyze(&mut self, sequence: &[f64]) -> AnalysisResult {
        self.analyze_since(Instant::now(), sequence)
    }

    /// Analyze untyped JSON input, as received from a host
    ///
    /// Non-arrays fail with `NotAnArray`; non-number elements with
    /// `NonNumeric`.
    pub fn analyze_json(&mut self, input: &Value) -> AnalysisResult {
        let start = Instant::now();
        match validate_json(input) {
            Ok(values) => self.analyze_since(start, &values),
            Err(e) => {
                tracing::warn!(error = %e, "rejected sequence input");
                let mut result = AnalysisResult::failure(Vec::new(), &e);
                let elapsed = start.elapsed();
                result.analysis_duration_ms = elapsed.as_secs_f64() * 1000.0;
                self.metrics.record(elapsed, false);
                result
            }
        }
    }

    fn analyze_since(&mut self, start: Instant, sequence: &[f64]) -> AnalysisResult {
        let key = canonical_key(sequence);

        if let Some(cached) = self.cache.get(&key) {
            let result = cached.clone();
            self.metrics.record(start.elapsed(), true);
            tracing::debug!(key = %key, "cache hit");
            return result;
        }
        tracing::debug!(key = %key, "cache miss");

        let mut result = match validate(sequence) {
            Ok(()) => self.run_pipeline(sequence),
            Err(e) => {
                tracing::warn!(error = %e, "rejected sequence input");
                AnalysisResult::failure(sequence.to_vec(), &e)
            }
        };

        let elapsed = start.elapsed();
        result.analysis_duration_ms = elapsed.as_secs_f64() * 1000.0;
        self.metrics.record(elapsed, false);

        if result.success {
            if let Some(evicted) = self.cache.insert(key, result.clone()) {
                tracing::warn!(key = %evicted, "cache full, evicted oldest entry");
            }
            self.history.push(result.clone());
        }

        result
    }

    fn run_pipeline(&self, sequence: &[f64]) -> AnalysisResult {
        let detection = detect_pattern(sequence, &self.config);
        let predicted_next = predict_next(sequence, &detection.pattern, &self.config);

        let analysis = PatternAnalysis {
            formula_description: formula_description(&detection.pattern),
            explanation: explanation(&detection.pattern, sequence),
            pattern: detection.pattern,
            confidence: detection.confidence,
            predicted_next,
        };

        AnalysisResult::success(sequence.to_vec(), analysis)
    }

    /// Analyze both sequences (through cache and history) and score them
    ///
    /// # Example
    /// ```
    /// use seqlens::analyzer::SequenceAnalyzer;
    ///
    /// let mut analyzer = SequenceAnalyzer::default();
    /// let cmp = analyzer.compare(&[2.0, 4.0, 6.0, 8.0], &[5.0, 10.0, 15.0, 20.0]);
    /// assert!(cmp.same_pattern);
    /// assert_eq!(cmp.similarity_score, 50);
    /// ```
    pub fn compare(&mut self, a: &[f64], b: &[f64]) -> ComparisonResult {
        let result_a = self.analyze(a);
        let result_b = self.analyze(b);
        self.score_results(result_a, result_b)
    }

    /// JSON-input variant of [`compare`](Self::compare)
    pub fn compare_json(&mut self, a: &Value, b: &Value) -> ComparisonResult {
        let result_a = self.analyze_json(a);
        let result_b = self.analyze_json(b);
        self.score_results(result_a, result_b)
    }

    /// Score two already-computed results against each other
    pub fn score_results(&self, result_a: AnalysisResult, result_b: AnalysisResult) -> ComparisonResult {
        let same = same_pattern(result_a.pattern(), result_b.pattern());
        let similarity = similarity_score(result_a.pattern(), result_b.pattern(), &self.config);

        ComparisonResult {
            result_a,
            result_b,
            same_pattern: same,
            similarity_score: similarity,
        }
    }

    /// Successful analyses, oldest first (independent copy)
    pub fn history(&self) -> Vec<AnalysisResult> {
        self.history.clone()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot(self.cache.len(), self.history.len())
    }

    /// Empty history and cache, reset metrics
    pub fn clear(&mut self) {
        self.history.clear();
        self.cache.clear();
        self.metrics.reset();
        tracing::debug!("analyzer state cleared");
    }
}

/// Cloneable handle to one analyzer behind a single mutex
///
/// Every operation, including both halves of `compare`, runs under the
/// same lock.
#[derive(Debug, Clone, Default)]
pub struct SharedAnalyzer {
    inner: Arc<Mutex<SequenceAnalyzer>>,
}

impl SharedAnalyzer {
    pub fn new(analyzer: SequenceAnalyzer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(analyzer)),
        }
    }

    pub fn analyze(&self, sequence: &[f64]) -> AnalysisResult {
        self.inner.lock().analyze(sequence)
    }

    pub fn analyze_json(&self, input: &Value) -> AnalysisResult {
        self.inner.lock().analyze_json(input)
    }

    pub fn compare(&self, a: &[f64], b: &[f64]) -> ComparisonResult {
        self.inner.lock().compare(a, b)
    }

    pub fn history(&self) -> Vec<AnalysisResult> {
        self.inner.lock().history()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.inner.lock().metrics()
    }

    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}
