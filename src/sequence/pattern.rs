// Pattern classification types
//
// Each pattern carries only its own parameters. Serialized adjacently
// tagged: {"pattern": "arithmetic", "parameters": {"commonDifference": 3}}.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generating rule of a sequence, with its pattern-specific parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern", content = "parameters", rename_all = "lowercase")]
pub enum Pattern {
    /// Constant difference between consecutive terms
    #[serde(rename_all = "camelCase")]
    Arithmetic { common_difference: f64 },

    /// Constant ratio between consecutive terms
    #[serde(rename_all = "camelCase")]
    Geometric { common_ratio: f64 },

    /// Each term is the sum of the two before it
    Fibonacci,

    /// Some finite-difference row is constant
    #[serde(rename_all = "camelCase")]
    Polynomial {
        degree: usize,
        constant_difference: f64,
    },

    /// No strategy matched
    Unknown,
}

impl Pattern {
    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Arithmetic { .. } => PatternKind::Arithmetic,
            Pattern::Geometric { .. } => PatternKind::Geometric,
            Pattern::Fibonacci => PatternKind::Fibonacci,
            Pattern::Polynomial { .. } => PatternKind::Polynomial,
            Pattern::Unknown => PatternKind::Unknown,
        }
    }

    /// Common difference, if this pattern exposes one
    pub fn common_difference(&self) -> Option<f64> {
        match self {
            Pattern::Arithmetic { common_difference } => Some(*common_difference),
            _ => None,
        }
    }

    /// Common ratio, if this pattern exposes one
    pub fn common_ratio(&self) -> Option<f64> {
        match self {
            Pattern::Geometric { common_ratio } => Some(*common_ratio),
            _ => None,
        }
    }
}

/// Pattern name without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Arithmetic,
    Geometric,
    Fibonacci,
    Polynomial,
    Unknown,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Arithmetic => "arithmetic",
            PatternKind::Geometric => "geometric",
            PatternKind::Fibonacci => "fibonacci",
            PatternKind::Polynomial => "polynomial",
            PatternKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A confirmed match from one detector
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub pattern: Pattern,

    /// Fixed per-pattern certainty (0-100), not a probability
    pub confidence: u8,
}

impl Detection {
    pub fn unknown() -> Self {
        Self {
            pattern: Pattern::Unknown,
            confidence: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_serializes_with_parameters() {
        let pattern = Pattern::Arithmetic {
            common_difference: 3.0,
        };
        let json = serde_json::to_value(&pattern).unwrap();
        assert_eq!(json["pattern"], "arithmetic");
        assert_eq!(json["parameters"]["commonDifference"], 3.0);
    }

    #[test]
    fn test_polynomial_serializes_degree_and_constant() {
        let pattern = Pattern::Polynomial {
            degree: 2,
            constant_difference: 2.0,
        };
        let json = serde_json::to_value(&pattern).unwrap();
        assert_eq!(json["pattern"], "polynomial");
        assert_eq!(json["parameters"]["degree"], 2);
        assert_eq!(json["parameters"]["constantDifference"], 2.0);
    }

    #[test]
    fn test_only_one_parameter_exposed() {
        let geometric = Pattern::Geometric { common_ratio: 2.0 };
        assert_eq!(geometric.common_ratio(), Some(2.0));
        assert_eq!(geometric.common_difference(), None);
        assert_eq!(Pattern::Fibonacci.common_ratio(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PatternKind::Polynomial.to_string(), "polynomial");
        assert_eq!(Pattern::Unknown.kind(), PatternKind::Unknown);
    }
}
