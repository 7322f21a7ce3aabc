//! seqlens - numeric sequence pattern detection and extrapolation
//!
//! This library identifies the generating rule of a finite sequence
//! (arithmetic, geometric, Fibonacci-like or polynomial), predicts the
//! terms that follow, and compares two sequences. Results are cached per
//! analyzer instance, with call history and timing metrics.

pub mod analyzer;
pub mod cache;
pub mod cli;
pub mod config;
pub mod input;
pub mod metrics;
pub mod report;
pub mod result;
pub mod sequence;

pub use analyzer::{SequenceAnalyzer, SharedAnalyzer};
pub use config::AnalyzerConfig;
pub use result::{AnalysisResult, ComparisonResult};
