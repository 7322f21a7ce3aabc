#![no_main]

use libfuzzer_sys::fuzz_target;
use seqlens::SequenceAnalyzer;

fuzz_target!(|data: &[u8]| {
    // Any JSON document must produce a result, never a panic
    if let Ok(input) = serde_json::from_slice::<serde_json::Value>(data) {
        let mut analyzer = SequenceAnalyzer::default();
        let first = analyzer.analyze_json(&input);
        let second = analyzer.analyze_json(&input);
        assert_eq!(first.success, second.success);
    }
});
