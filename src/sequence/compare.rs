// Similarity scoring between two analyses
//
// 0 when the patterns differ. Otherwise a base of 50 plus independent
// bonuses: +25 for an identical common difference, +25 for common ratios
// within `ratio_similarity_tolerance`. A pattern exposes at most one of
// the two parameters, so the ceiling reached in practice is 75; the cap
// at 100 is kept regardless.

use crate::config::AnalyzerConfig;
use crate::sequence::pattern::Pattern;

pub const BASE_SIMILARITY: u8 = 50;
pub const PARAMETER_BONUS: u8 = 25;
pub const MAX_SIMILARITY: u8 = 100;

/// True when both analyses succeeded with the same pattern kind
pub fn same_pattern(a: Option<&Pattern>, b: Option<&Pattern>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.kind() == b.kind(),
        _ => false,
    }
}

/// Score how alike two detected patterns are (0-100)
///
/// Failed analyses (`None`) never match anything.
///
/// # Example
/// ```
/// use seqlens::config::AnalyzerConfig;
/// use seqlens::sequence::{similarity_score, Pattern};
///
/// let a = Pattern::Arithmetic { common_difference: 2.0 };
/// let b = Pattern::Arithmetic { common_difference: 5.0 };
/// assert_eq!(similarity_score(Some(&a), Some(&b), &AnalyzerConfig::default()), 50);
/// ```
pub fn similarity_score(a: Option<&Pattern>, b: Option<&Pattern>, config: &AnalyzerConfig) -> u8 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) if a.kind() == b.kind() => (a, b),
        _ => return 0,
    };

    let mut score = BASE_SIMILARITY;

    if let (Some(da), Some(db)) = (a.common_difference(), b.common_difference()) {
        if da == db {
            score += PARAMETER_BONUS;
        }
    }

    if let (Some(ra), Some(rb)) = (a.common_ratio(), b.common_ratio()) {
        if (ra - rb).abs() < config.ratio_similarity_tolerance {
            score += PARAMETER_BONUS;
        }
    }

    score.min(MAX_SIMILARITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalyzerConfig {
        AnalyzerConfig::default()
    }

    #[test]
    fn test_different_patterns_score_zero() {
        let a = Pattern::Arithmetic {
            common_difference: 2.0,
        };
        let b = Pattern::Geometric { common_ratio: 2.0 };
        assert_eq!(similarity_score(Some(&a), Some(&b), &config()), 0);
        assert!(!same_pattern(Some(&a), Some(&b)));
    }

    #[test]
    fn test_equal_difference_bonus() {
        let a = Pattern::Arithmetic {
            common_difference: 3.0,
        };
        assert_eq!(similarity_score(Some(&a), Some(&a), &config()), 75);
    }

    #[test]
    fn test_close_ratio_bonus() {
        let a = Pattern::Geometric { common_ratio: 2.0 };
        let b = Pattern::Geometric { common_ratio: 2.005 };
        assert_eq!(similarity_score(Some(&a), Some(&b), &config()), 75);

        let c = Pattern::Geometric { common_ratio: 2.5 };
        assert_eq!(similarity_score(Some(&a), Some(&c), &config()), 50);
    }

    #[test]
    fn test_parameterless_patterns_get_base() {
        assert_eq!(
            similarity_score(Some(&Pattern::Fibonacci), Some(&Pattern::Fibonacci), &config()),
            50
        );
        assert_eq!(
            similarity_score(Some(&Pattern::Unknown), Some(&Pattern::Unknown), &config()),
            50
        );
    }

    #[test]
    fn test_failed_analysis_never_matches() {
        assert_eq!(similarity_score(None, None, &config()), 0);
        assert!(!same_pattern(None, Some(&Pattern::Fibonacci)));
    }
}
