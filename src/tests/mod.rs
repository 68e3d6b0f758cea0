//! Test modules for the Helu Counting Trie.
//!
//! This module contains the crate-level testing infrastructure, including:
//! - Unit tests for the trie operations and their interactions
//! - Parameterized validation tests for every error path
//! - Property-based tests using proptest
//! - Shared generation strategies
//!
//! The test philosophy follows the project standards:
//! - Testing all error paths and edge cases
//! - Property-based testing for input validation and count bookkeeping


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{disjoint_key_strategy, key_strategy, multiplicity_strategy};
