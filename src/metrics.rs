//! Running performance counters for the analyzer
//!
//! Every `analyze` call is timed, including cache hits and rejected input.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters owned by one analyzer instance
#[derive(Debug, Default, Clone)]
pub struct AnalysisMetrics {
    total_analyses: u64,
    cache_hits: u64,
    average_duration_ms: f64,
}

impl AnalysisMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed `analyze` call
    pub fn record(&mut self, duration: Duration, cache_hit: bool) {
        self.total_analyses += 1;
        if cache_hit {
            self.cache_hits += 1;
        }

        let ms = duration.as_secs_f64() * 1000.0;
        let n = self.total_analyses as f64;
        self.average_duration_ms += (ms - self.average_duration_ms) / n;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Point-in-time copy, with sizes supplied by the owner
    pub fn snapshot(&self, cache_size: usize, history_size: usize) -> MetricsSnapshot {
        MetricsSnapshot {
            total_analyses: self.total_analyses,
            cache_hits: self.cache_hits,
            average_analysis_duration_ms: self.average_duration_ms,
            cache_size,
            history_size,
        }
    }
}

/// Metrics as reported to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_analyses: u64,
    pub cache_hits: u64,
    pub average_analysis_duration_ms: f64,
    pub cache_size: usize,
    pub history_size: usize,
}

impl MetricsSnapshot {
    /// Fraction of calls served from cache (0.0 when nothing ran)
    pub fn cache_hit_rate(&self) -> f64 {
        if self.total_analyses == 0 {
            return 0.0;
        }
        self.cache_hits as f64 / self.total_analyses as f64
    }
}
