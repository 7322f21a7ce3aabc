// Extrapolation of future terms once a pattern is confirmed
//
// Polynomial extrapolation rebuilds the forward-difference table and
// extends it from the constant row upward (Newton forward differences).

use crate::config::AnalyzerConfig;
use crate::sequence::detect::differences;
use crate::sequence::pattern::Pattern;

/// Predict the next `config.prediction_count` terms
///
/// Returns `[None]` for `Pattern::Unknown`. The sequence must be valid
/// (at least two finite terms) and consistent with `pattern`.
///
/// # Example
/// ```
/// use seqlens::config::AnalyzerConfig;
/// use seqlens::sequence::{predict_next, Pattern};
///
/// let next = predict_next(
///     &[3.0, 6.0, 9.0, 12.0],
///     &Pattern::Arithmetic { common_difference: 3.0 },
///     &AnalyzerConfig::default(),
/// );
/// assert_eq!(next, vec![Some(15.0), Some(18.0), Some(21.0), Some(24.0), Some(27.0)]);
/// ```
pub fn predict_next(sequence: &[f64], pattern: &Pattern, config: &AnalyzerConfig) -> Vec<Option<f64>> {
    let count = config.prediction_count;
    let last = match sequence.last() {
        Some(&last) => last,
        None => return vec![None],
    };

    let values: Vec<f64> = match pattern {
        Pattern::Arithmetic { common_difference } => (1..=count)
            .map(|k| last + k as f64 * common_difference)
            .collect(),
        Pattern::Geometric { common_ratio } => (1..=count)
            .map(|k| round_to(last * common_ratio.powi(k as i32), config.prediction_decimals))
            .collect(),
        Pattern::Fibonacci => extend_fibonacci(sequence, count),
        Pattern::Polynomial { degree, .. } => extend_polynomial(sequence, *degree, count),
        Pattern::Unknown => return vec![None],
    };

    values.into_iter().map(Some).collect()
}

/// Round to a fixed number of decimal places
///
/// Values too large to scale are returned as-is; they carry no fraction.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn extend_fibonacci(sequence: &[f64], count: usize) -> Vec<f64> {
    let (mut prev, mut curr) = match sequence {
        [.., a, b] => (*a, *b),
        _ => return Vec::new(),
    };
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let next = prev + curr;
        out.push(next);
        prev = curr;
        curr = next;
    }
    out
}

fn extend_polynomial(sequence: &[f64], degree: usize, count: usize) -> Vec<f64> {
    // rows[0] is the sequence, rows[degree] the constant row
    let mut rows = vec![sequence.to_vec()];
    for r in 1..=degree {
        let next = differences(&rows[r - 1]);
        rows.push(next);
    }

    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        if let Some(&constant) = rows[degree].last() {
            rows[degree].push(constant);
        }
        for r in (0..degree).rev() {
            let below = rows[r + 1].last().copied().unwrap_or(0.0);
            let here = rows[r].last().copied().unwrap_or(0.0);
            rows[r].push(here + below);
        }
        if let Some(&value) = rows[0].last() {
            out.push(value);
        }
    }
    out
}

/// Formula text for a detected pattern
pub fn formula_description(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Arithmetic { common_difference } => {
            format!("a(n) = a(1) + (n - 1) * {}", common_difference)
        }
        Pattern::Geometric { common_ratio } => format!("a(n) = a(1) * {}^(n - 1)", common_ratio),
        Pattern::Fibonacci => "a(n) = a(n - 1) + a(n - 2)".to_string(),
        Pattern::Polynomial {
            degree,
            constant_difference,
        } => format!(
            "Polynomial of degree {} (constant difference {} at order {})",
            degree, constant_difference, degree
        ),
        Pattern::Unknown => "No recognizable pattern found".to_string(),
    }
}

/// Plain-language explanation of why the pattern was chosen
pub fn explanation(pattern: &Pattern, sequence: &[f64]) -> String {
    match pattern {
        Pattern::Arithmetic { common_difference } => format!(
            "Each term differs from the previous one by {}.",
            common_difference
        ),
        Pattern::Geometric { common_ratio } => format!(
            "Each term is the previous one multiplied by {}.",
            common_ratio
        ),
        Pattern::Fibonacci => {
            "Each term is the sum of the two terms before it.".to_string()
        }
        Pattern::Polynomial {
            degree,
            constant_difference,
        } => format!(
            "Taking differences {} time(s) yields the constant {}, so the terms follow a degree-{} polynomial.",
            degree, constant_difference, degree
        ),
        Pattern::Unknown => format!(
            "None of the arithmetic, geometric, Fibonacci or polynomial checks matched the {} terms.",
            sequence.len()
        ),
    }
}
