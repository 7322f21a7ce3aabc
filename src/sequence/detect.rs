// Priority-ordered pattern detection
//
// Detectors run in a fixed order and the first match wins:
//   Arithmetic -> Geometric -> Fibonacci -> Polynomial
//
// Fibonacci runs before Polynomial: many Fibonacci-like sequences show
// non-constant differences at every depth the polynomial check inspects.
//
// Every detector is a pure function of the sequence and the configuration.

use crate::config::AnalyzerConfig;
use crate::sequence::pattern::{Detection, Pattern};

/// Signature shared by every detector in the chain
pub type Detector = fn(&[f64], &AnalyzerConfig) -> Option<Detection>;

/// Detectors in priority order
pub const DETECTORS: [(&str, Detector); 4] = [
    ("arithmetic", detect_arithmetic),
    ("geometric", detect_geometric),
    ("fibonacci", detect_fibonacci),
    ("polynomial", detect_polynomial),
];

/// Confidence reported by exact detectors
pub const EXACT_CONFIDENCE: u8 = 100;

/// Confidence reported for polynomial matches
pub const POLYNOMIAL_CONFIDENCE: u8 = 95;

/// Run the detector chain, short-circuiting on the first match
///
/// Returns `Pattern::Unknown` with confidence 0 when nothing matches.
/// The sequence is assumed to have passed validation.
///
/// # Example
/// ```
/// use seqlens::config::AnalyzerConfig;
/// use seqlens::sequence::{detect_pattern, Pattern};
///
/// let detection = detect_pattern(&[3.0, 6.0, 9.0, 12.0], &AnalyzerConfig::default());
/// assert_eq!(detection.pattern, Pattern::Arithmetic { common_difference: 3.0 });
/// assert_eq!(detection.confidence, 100);
/// ```
pub fn detect_pattern(sequence: &[f64], config: &AnalyzerConfig) -> Detection {
    DETECTORS
        .iter()
        .find_map(|(name, detector)| {
            tracing::trace!(detector = *name, len = sequence.len(), "trying detector");
            let detection = detector(sequence, config);
            if detection.is_some() {
                tracing::debug!(detector = *name, "detector matched");
            }
            detection
        })
        .unwrap_or_else(Detection::unknown)
}

/// Consecutive pairwise differences: `d[i] = s[i+1] - s[i]`
pub fn differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// True when every value is exactly equal to a finite first value
///
/// An overflowed difference row (`inf`) is never constant.
fn all_equal(values: &[f64]) -> bool {
    match values.first() {
        Some(first) if first.is_finite() => values.iter().all(|v| v == first),
        _ => false,
    }
}

/// Constant difference, compared exactly
pub fn detect_arithmetic(sequence: &[f64], _config: &AnalyzerConfig) -> Option<Detection> {
    let diffs = differences(sequence);
    if !all_equal(&diffs) {
        return None;
    }

    Some(Detection {
        pattern: Pattern::Arithmetic {
            common_difference: diffs[0],
        },
        confidence: EXACT_CONFIDENCE,
    })
}

/// Constant ratio within `geometric_tolerance`
///
/// Any zero term disqualifies the sequence before a ratio is computed.
pub fn detect_geometric(sequence: &[f64], config: &AnalyzerConfig) -> Option<Detection> {
    if sequence.len() < 2 || sequence.iter().any(|&v| v == 0.0) {
        return None;
    }

    let ratios: Vec<f64> = sequence.windows(2).map(|w| w[1] / w[0]).collect();
    let first = ratios[0];

    // NaN deviations (overflowed ratios) never match
    let within_tolerance = ratios
        .iter()
        .all(|r| (r - first).abs() < config.geometric_tolerance);
    if !within_tolerance {
        return None;
    }

    Some(Detection {
        pattern: Pattern::Geometric {
            common_ratio: first,
        },
        confidence: EXACT_CONFIDENCE,
    })
}

/// Every term from the third on is the sum of the previous two
///
/// All-or-nothing: a single mismatch anywhere rejects the sequence.
pub fn detect_fibonacci(sequence: &[f64], config: &AnalyzerConfig) -> Option<Detection> {
    if sequence.len() < 3 {
        return None;
    }

    let matches = sequence
        .windows(3)
        .all(|w| (w[2] - (w[1] + w[0])).abs() < config.fibonacci_tolerance);

    matches.then(|| Detection {
        pattern: Pattern::Fibonacci,
        confidence: EXACT_CONFIDENCE,
    })
}

/// Some finite-difference row up to `max_difference_depth` is constant
///
/// Level 0 is the first differences, so a constant row at level `L`
/// means a polynomial of degree `L + 1`.
pub fn detect_polynomial(sequence: &[f64], config: &AnalyzerConfig) -> Option<Detection> {
    let mut row = differences(sequence);

    for level in 0..config.max_difference_depth {
        if row.is_empty() {
            break;
        }
        if all_equal(&row) {
            return Some(Detection {
                pattern: Pattern::Polynomial {
                    degree: level + 1,
                    constant_difference: row[0],
                },
                confidence: POLYNOMIAL_CONFIDENCE,
            });
        }
        row = differences(&row);
    }

    None
}
