//! Benchmarking module for the Helu Counting Trie.
//!
//! This module contains helpers for the criterion benchmarks covering the
//! trie's critical paths. It is only compiled with the `benchmarking`
//! feature, which the bench target requires.

/// Generate `count` distinct keys of `length` characters.
///
/// Keys are zero-padded decimal strings, so consecutive keys share long
/// prefixes and exercise the shared-path count bookkeeping.
pub fn generate_keys(count: usize, length: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{:0width$}", i, width = length))
        .collect()
}

/// Generate `count` keys fanned out under `branching` distinct prefixes.
pub fn generate_prefixed_keys(count: usize, branching: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("prefix_{}_key_{}", i % branching, i))
        .collect()
}
