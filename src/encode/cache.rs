//! Per-batch identifier cache
//!
//! Trace and span identifiers arrive in textual form and recur heavily
//! within a batch (every link repeats a trace id, sibling spans share one).
//! The cache memoizes the text-to-binary conversion for the duration of a
//! single batch.
//!
//! The cache is a plain value owned by the caller, not ambient state: each
//! batch gets its own instance (or a reused one, cleared between batches),
//! which is what makes concurrent encoding of independent batches safe
//! without any locking.

use std::collections::HashMap;

use bytes::Bytes;

/// Memo table mapping a textual identifier to its binary encoding.
#[derive(Debug, Default)]
pub struct IdBytesCache {
    entries: HashMap<String, Bytes>,
}

impl IdBytesCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary form of `text`, invoking `produce` at most once per distinct
    /// text until the next [`clear`](Self::clear).
    ///
    /// The returned [`Bytes`] is a cheap refcounted handle, so callers may
    /// retain it past the cache's lifetime.
    pub fn bytes_for(&mut self, text: &str, produce: impl FnOnce() -> Bytes) -> Bytes {
        if let Some(bytes) = self.entries.get(text) {
            return bytes.clone();
        }
        let bytes = produce();
        self.entries.insert(text.to_owned(), bytes.clone());
        bytes
    }

    /// Drop all entries, bounding memory to one batch's distinct ids.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the cache currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct identifiers currently memoized.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn producer_runs_at_most_once_per_distinct_text() {
        let mut cache = IdBytesCache::new();
        let mut calls = 0;

        let first = cache.bytes_for("0102", || {
            calls += 1;
            Bytes::from_static(&[1, 2])
        });
        let second = cache.bytes_for("0102", || {
            calls += 1;
            Bytes::from_static(&[9, 9])
        });

        assert_eq!(calls, 1);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = IdBytesCache::new();
        cache.bytes_for("ff", || Bytes::from_static(&[0xff]));
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn retained_handles_survive_clear() {
        let mut cache = IdBytesCache::new();
        let handle = cache.bytes_for("abcd", || Bytes::from_static(&[0xab, 0xcd]));
        cache.clear();
        assert_eq!(&handle[..], &[0xab, 0xcd]);
    }
}
