// Configuration for sequence analysis
//
// Defaults reproduce the fixed constants of the detection engine. A TOML
// file may override any subset of fields; missing fields keep defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for detection, prediction, comparison and caching
///
/// # Example
/// ```
/// use seqlens::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.prediction_count, 5);
/// assert!(config.cache_capacity.is_none()); // entries never expire
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Number of future terms to predict
    pub prediction_count: usize,

    /// Maximum spread of consecutive ratios for a geometric match
    ///
    /// Absorbs floating-point error, not near-misses.
    pub geometric_tolerance: f64,

    /// Maximum |s[i] - (s[i-1] + s[i-2])| for a Fibonacci match
    pub fibonacci_tolerance: f64,

    /// Number of finite-difference levels the polynomial detector inspects
    pub max_difference_depth: usize,

    /// Maximum |ratio_a - ratio_b| that earns the comparison ratio bonus
    pub ratio_similarity_tolerance: f64,

    /// Decimal places kept in geometric predictions
    pub prediction_decimals: u32,

    /// Maximum cached results; `None` keeps every entry until `clear()`
    ///
    /// When full, the oldest inserted entry is evicted first.
    pub cache_capacity: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            prediction_count: 5,
            geometric_tolerance: 1e-4,
            fibonacci_tolerance: 1e-4,
            max_difference_depth: 5,
            ratio_similarity_tolerance: 0.01,
            prediction_decimals: 4,
            cache_capacity: None,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file and validate it
    ///
    /// # Example TOML
    /// ```toml
    /// prediction_count = 8
    /// cache_capacity = 1024
    /// ```
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).with_context(|| "Failed to parse TOML analyzer config")?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.prediction_count == 0 {
            return Err("prediction_count must be >= 1, got 0".to_string());
        }

        for (name, value) in [
            ("geometric_tolerance", self.geometric_tolerance),
            ("fibonacci_tolerance", self.fibonacci_tolerance),
            ("ratio_similarity_tolerance", self.ratio_similarity_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{} must be a non-negative finite number, got {}",
                    name, value
                ));
            }
        }

        if self.max_difference_depth == 0 {
            return Err("max_difference_depth must be >= 1, got 0".to_string());
        }

        if self.prediction_decimals > 15 {
            return Err(format!(
                "prediction_decimals must be <= 15, got {}",
                self.prediction_decimals
            ));
        }

        if self.cache_capacity == Some(0) {
            return Err("cache_capacity must be >= 1 when set, got 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.prediction_count, 5);
        assert_eq!(config.geometric_tolerance, 1e-4);
        assert_eq!(config.fibonacci_tolerance, 1e-4);
        assert_eq!(config.max_difference_depth, 5);
        assert_eq!(config.ratio_similarity_tolerance, 0.01);
        assert_eq!(config.prediction_decimals, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AnalyzerConfig::from_toml_str("prediction_count = 3\ncache_capacity = 16\n")
            .unwrap();
        assert_eq!(config.prediction_count, 3);
        assert_eq!(config.cache_capacity, Some(16));
        assert_eq!(config.max_difference_depth, 5);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AnalyzerConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_difference_depth = 3").unwrap();
        let config = AnalyzerConfig::from_toml(file.path()).unwrap();
        assert_eq!(config.max_difference_depth, 3);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = AnalyzerConfig::from_toml("/nonexistent/seqlens.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        assert!(AnalyzerConfig::from_toml_str("prediction_count = 0").is_err());
        assert!(AnalyzerConfig::from_toml_str("cache_capacity = 0").is_err());
        assert!(AnalyzerConfig::from_toml_str("prediction_count = \"five\"").is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_tolerance() {
        let mut config = AnalyzerConfig::default();
        config.geometric_tolerance = -1.0;
        assert!(config.validate().is_err());

        config.geometric_tolerance = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_depth() {
        let mut config = AnalyzerConfig::default();
        config.max_difference_depth = 0;
        assert!(config.validate().is_err());
    }
}
