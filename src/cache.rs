//! Result cache keyed by the canonical form of a sequence
//!
//! Two sequences share a key only if they have the same length and the
//! same values in the same order. Entries never expire; with a capacity
//! set, the oldest inserted entry is evicted first.

use crate::result::AnalysisResult;
use std::collections::{HashMap, VecDeque};

/// Canonical cache key: `{:?}` float rendering joined by commas
///
/// Negative zero is rendered as `0.0`, since it compares equal to zero.
///
/// # Example
/// ```
/// use seqlens::cache::canonical_key;
///
/// assert_eq!(canonical_key(&[3.0, 6.0, 9.0]), "3.0,6.0,9.0");
/// assert_ne!(canonical_key(&[1.0, 2.0]), canonical_key(&[2.0, 1.0]));
/// ```
pub fn canonical_key(sequence: &[f64]) -> String {
    sequence
        .iter()
        .map(|&v| {
            let v = if v == 0.0 { 0.0 } else { v };
            format!("{:?}", v)
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Insertion-ordered map from canonical key to analysis result
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, AnalysisResult>,
    /// Keys in insertion order, for eviction
    order: VecDeque<String>,
    capacity: Option<usize>,
}

impl ResultCache {
    /// Create a cache; `None` means unbounded
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<&AnalysisResult> {
        self.entries.get(key)
    }

    /// Store a result, evicting the oldest entry if at capacity
    ///
    /// Returns the evicted key, if any.
    pub fn insert(&mut self, key: String, result: AnalysisResult) -> Option<String> {
        if self.entries.contains_key(&key) {
            self.entries.insert(key, result);
            return None;
        }

        let mut evicted = None;
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                    evicted = Some(oldest);
                }
            }
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, result);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
