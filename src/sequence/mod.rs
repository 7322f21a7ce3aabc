// Sequence pattern detection and extrapolation
//
// The pipeline for one sequence is:
//   validate -> detect (first matching strategy) -> predict
//
// Detectors, in priority order: arithmetic, geometric, Fibonacci,
// polynomial (finite differences up to a configured depth). Confidence is
// a fixed per-pattern value, not a statistical estimate.
//
// Everything here is pure; cache, history and metrics live in
// `crate::analyzer`.

mod compare;
mod detect;
mod pattern;
mod predict;
mod validate;

pub use compare::{same_pattern, similarity_score};
pub use detect::{
    detect_arithmetic, detect_fibonacci, detect_geometric, detect_pattern, detect_polynomial,
    differences, Detector, DETECTORS,
};
pub use pattern::{Detection, Pattern, PatternKind};
pub use predict::{explanation, formula_description, predict_next, round_to};
pub use validate::{validate, validate_json, ValidationError, ValidationErrorKind, MIN_SEQUENCE_LEN};
