//! Helu Counting Trie Library
//!
//! This library provides a counting prefix trie: an associative structure
//! mapping string keys to positive integer multiplicities, with
//! accumulation on insert, decrement-and-prune semantics on removal, and
//! prefix-aware existence and count queries.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - Single-owner tree with exclusive mutation, no interior locking
//! - Comprehensive error handling and propagation
//! - Validation before mutation, so rejected calls never leave the trie
//!   partially updated
//! - Lazy node creation with last-one-out pruning on removal

// Re-export public modules
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

// Re-export common types
pub use trie::{HeluTrie, HeluTrieConfig, HeluTrieError, HeluTrieResult};

/// Version information for the Helu Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
