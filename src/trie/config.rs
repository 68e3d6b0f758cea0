// Copyright (c) 2025 Helu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Helu Counting Trie.

/// Configuration for the Helu Counting Trie.
#[derive(Debug, Clone)]
pub struct HeluTrieConfig {
    /// Maximum key length in characters accepted by insert.
    /// `None` means keys of any length are accepted.
    pub max_key_length: Option<usize>,

    /// Initial capacity of each node's child map.
    /// Keys sharing few prefixes benefit from a small value; dense tries
    /// can reserve more slots up front to avoid rehashing.
    pub child_capacity: usize,
}

impl HeluTrieConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// A new `HeluTrieConfig` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum key length in characters accepted by insert.
    ///
    /// # Arguments
    ///
    /// * `max_key_length` - The maximum number of characters per key.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        if max_key_length == 0 {
            panic!("Maximum key length must be greater than 0");
        }
        self.max_key_length = Some(max_key_length);
        self
    }

    /// Sets the initial capacity of each node's child map.
    ///
    /// # Arguments
    ///
    /// * `child_capacity` - The number of child slots to reserve per node.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_child_capacity(mut self, child_capacity: usize) -> Self {
        self.child_capacity = child_capacity;
        self
    }
}

impl Default for HeluTrieConfig {
    fn default() -> Self {
        Self {
            max_key_length: None, // Unlimited; matches classic trie behavior
            child_capacity: 0,    // Lazy allocation until the first child
        }
    }
}
