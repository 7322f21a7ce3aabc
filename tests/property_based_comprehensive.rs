//! Property-based tests for the sequence analyzer
//!
//! Core properties covered:
//! 1. Arithmetic sequences are detected and extrapolated exactly
//! 2. Geometric sequences are detected and extrapolated within 1e-4
//! 3. Repeated analysis is served from cache with an identical payload
//! 4. clear() resets history and metrics
//! 5. compare() is symmetric
//! 6. Arbitrary input never panics

use proptest::prelude::*;
use seqlens::sequence::PatternKind;
use seqlens::SequenceAnalyzer;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_arithmetic_detected(
        start in -1000i32..1000,
        step in -50i32..50,
        len in 2usize..12,
    ) {
        // Integer-valued terms keep every difference exact
        let seq: Vec<f64> = (0..len).map(|i| (start + step * i as i32) as f64).collect();
        let mut analyzer = SequenceAnalyzer::default();
        let result = analyzer.analyze(&seq);

        prop_assert_eq!(result.pattern_kind(), Some(PatternKind::Arithmetic));
        let last = *seq.last().unwrap();
        prop_assert_eq!(result.predicted_next()[0], Some(last + step as f64));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_geometric_detected(
        start in prop::sample::select(vec![-3.0f64, -1.0, 1.0, 2.0, 5.0]),
        ratio in prop::sample::select(vec![-2.0f64, 0.5, 3.0, 1.5, 4.0]),
        len in 3usize..8,
    ) {
        let seq: Vec<f64> = (0..len).map(|i| start * ratio.powi(i as i32)).collect();
        let mut analyzer = SequenceAnalyzer::default();
        let result = analyzer.analyze(&seq);

        prop_assert_eq!(result.pattern_kind(), Some(PatternKind::Geometric));
        let expected = seq.last().unwrap() * ratio;
        let predicted = result.predicted_next()[0].unwrap();
        prop_assert!((predicted - expected).abs() < 1e-4);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_repeat_analysis_hits_cache(
        seq in prop::collection::vec(-1e6f64..1e6, 2..10),
    ) {
        let mut analyzer = SequenceAnalyzer::default();
        let first = analyzer.analyze(&seq);
        let before = analyzer.metrics().cache_hits;
        let second = analyzer.analyze(&seq);

        prop_assert!(first.same_payload(&second));
        prop_assert_eq!(analyzer.metrics().cache_hits, before + 1);
        prop_assert_eq!(analyzer.history().len(), 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_clear_resets_state(
        seqs in prop::collection::vec(prop::collection::vec(-100f64..100.0, 0..6), 1..6),
    ) {
        let mut analyzer = SequenceAnalyzer::default();
        for seq in &seqs {
            analyzer.analyze(seq);
        }
        analyzer.clear();

        prop_assert!(analyzer.history().is_empty());
        let metrics = analyzer.metrics();
        prop_assert_eq!(metrics.total_analyses, 0);
        prop_assert_eq!(metrics.cache_size, 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_compare_symmetric(
        a in prop::collection::vec(-20i32..20, 0..7),
        b in prop::collection::vec(-20i32..20, 0..7),
    ) {
        let a: Vec<f64> = a.into_iter().map(f64::from).collect();
        let b: Vec<f64> = b.into_iter().map(f64::from).collect();
        let mut analyzer = SequenceAnalyzer::default();

        let ab = analyzer.compare(&a, &b);
        let ba = analyzer.compare(&b, &a);

        prop_assert_eq!(ab.same_pattern, ba.same_pattern);
        prop_assert_eq!(ab.similarity_score, ba.similarity_score);
        prop_assert!(ab.similarity_score <= 100);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_arbitrary_floats_never_panic(
        seq in prop::collection::vec(prop::num::f64::ANY, 0..12),
    ) {
        let mut analyzer = SequenceAnalyzer::default();
        let result = analyzer.analyze(&seq);

        // success=false implies no pattern fields
        if !result.success {
            prop_assert!(result.analysis.is_none());
            prop_assert!(result.error_message.is_some());
        }
        prop_assert_eq!(analyzer.metrics().total_analyses, 1);
    }
}

#[test]
fn test_boundary_inputs() {
    use seqlens::sequence::ValidationErrorKind;

    let mut analyzer = SequenceAnalyzer::default();
    assert_eq!(
        analyzer.analyze(&[5.0]).error_kind,
        Some(ValidationErrorKind::TooShort)
    );
    assert_eq!(
        analyzer.analyze(&[]).error_kind,
        Some(ValidationErrorKind::TooShort)
    );
    assert_eq!(
        analyzer.analyze_json(&serde_json::json!([1, "x"])).error_kind,
        Some(ValidationErrorKind::NonNumeric)
    );
    assert_eq!(
        analyzer.analyze(&[1.0, 2.0, f64::NAN, 4.0]).error_kind,
        Some(ValidationErrorKind::NonNumeric)
    );
}
