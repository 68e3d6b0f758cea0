//! Error types for the Helu Counting Trie.
//!
//! This module defines the error types that can occur during Helu Trie operations.

/// Errors that can occur in Helu Trie operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeluTrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key exceeds the configured maximum length.
    #[error("Key '{key}' exceeds maximum key length of {max_length}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed length in characters.
        max_length: usize,
    },

    /// Error when a multiplicity of zero is provided.
    #[error("Multiplicity must be greater than zero")]
    ZeroMultiplicity,

    /// Error when removing a key that is not present.
    #[error("Key '{0}' not present in trie")]
    KeyNotFound(String),
}

// Display implementation is automatically provided by thiserror
