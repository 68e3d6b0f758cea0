//! Helu Counting Trie Implementation
//!
//! This module provides a counting prefix trie mapping string keys to
//! positive integer multiplicities, with accumulation on insert,
//! decrement-and-prune on removal, and prefix-frequency lookups.

mod config;
mod error;
mod node;

use std::collections::hash_map::Entry;

pub use config::HeluTrieConfig;
pub use error::HeluTrieError;
use node::TrieNode;
use tracing::{debug, trace};

/// Result type for Helu Trie operations
pub type HeluTrieResult<T> = Result<T, HeluTrieError>;

const TRIE_LOG_TARGET: &str = "helu_trie";

/// Helu Counting Trie is a prefix trie that tracks how many insertions pass
/// through every node, supporting multiplicity-weighted insertion,
/// decrement-and-prune removal, and prefix-frequency queries.
///
/// Key features:
/// * Counts accumulate along the whole key path, so a node's count answers
///   "how many insertions have this path as a prefix"
/// * Removal decrements along the path and prunes the first node whose
///   count reaches zero, detaching the rest of the subtree in one step
/// * Single-owner tree with no interior locking; mutation goes through
///   `&mut self` and shared access is serialized by the caller
/// * Memory efficient representation for shared prefixes
///
/// # Examples
///
/// ```
/// use helu_trie::HeluTrie;
///
/// let mut trie = HeluTrie::new();
/// trie.insert("foo").unwrap();
/// trie.insert_with_multiplicity("foobar", 2).unwrap();
///
/// assert_eq!(trie.count("foo").unwrap(), 3);
/// assert!(trie.contains("foob").unwrap());
/// ```
#[derive(Debug)]
pub struct HeluTrie {
    /// The root node of the trie; represents the empty prefix
    root: TrieNode,

    /// Configuration options
    config: HeluTrieConfig,
}

impl HeluTrie {
    /// Creates a new empty `HeluTrie` with default configuration.
    ///
    /// # Returns
    ///
    /// A new `HeluTrie` instance.
    pub fn new() -> Self {
        Self::with_config(HeluTrieConfig::default())
    }

    /// Creates a new empty `HeluTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    ///
    /// # Returns
    ///
    /// A new `HeluTrie` instance.
    pub fn with_config(config: HeluTrieConfig) -> Self {
        Self {
            root: TrieNode::with_capacity(config.child_capacity),
            config,
        }
    }

    /// Inserts a key once, equivalent to a multiplicity of 1.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the walk crossed an existing word ending
    ///   or created no new nodes (see
    ///   [`insert_with_multiplicity`](Self::insert_with_multiplicity)).
    /// * `Err(HeluTrieError)` - If the key is empty or exceeds the
    ///   configured maximum length.
    pub fn insert<K>(&mut self, key: K) -> HeluTrieResult<bool>
    where
        K: AsRef<str>,
    {
        self.insert_with_multiplicity(key, 1)
    }

    /// Inserts a key with the given multiplicity, adding it to the count of
    /// every node along the key's path.
    ///
    /// Walks the trie from the root, creating missing nodes, and marks the
    /// final node as a word ending. The count of each traversed node grows
    /// by `multiplicity`, saturating at `u64::MAX`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `multiplicity` - Positive weight added to every node on the path.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The walk crossed an existing word ending, or every
    ///   node on the path already existed.
    /// * `Ok(false)` - At least one node was created and no word ending was
    ///   crossed; the key is new structure.
    /// * `Err(HeluTrieError)` - If the key is empty or too long, or the
    ///   multiplicity is zero. Rejected calls leave the trie unchanged.
    pub fn insert_with_multiplicity<K>(&mut self, key: K, multiplicity: u64) -> HeluTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(HeluTrieError::EmptyKey);
        }

        if let Some(max_length) = self.config.max_key_length {
            if key.chars().count() > max_length {
                return Err(HeluTrieError::KeyTooLong {
                    key: key.to_string(),
                    max_length,
                });
            }
        }

        if multiplicity == 0 {
            return Err(HeluTrieError::ZeroMultiplicity);
        }

        let child_capacity = self.config.child_capacity;
        let mut node = &mut self.root;
        let mut created_node = false;
        let mut crossed_word = false;

        for ch in key.chars() {
            let child = match node.children.entry(ch) {
                Entry::Occupied(entry) => {
                    let child = entry.into_mut();
                    if child.is_word_ending {
                        crossed_word = true;
                    }
                    child
                }
                Entry::Vacant(entry) => {
                    created_node = true;
                    entry.insert(TrieNode::with_capacity(child_capacity))
                }
            };

            child.count = child.count.saturating_add(multiplicity);
            node = child;
        }

        // The key is non-empty, so the walk always ends on a child node and
        // the root is never marked as a word ending.
        node.is_word_ending = true;

        trace!(
            target: TRIE_LOG_TARGET,
            key = %key,
            multiplicity,
            created_node,
            "Inserted key"
        );

        Ok(crossed_word || !created_node)
    }

    /// Removes a key once, equivalent to a multiplicity of 1.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to remove.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` on success (see
    ///   [`remove_with_multiplicity`](Self::remove_with_multiplicity)).
    /// * `Err(HeluTrieError)` - If the key is empty or not present.
    pub fn remove<K>(&mut self, key: K) -> HeluTrieResult<bool>
    where
        K: AsRef<str>,
    {
        self.remove_with_multiplicity(key, 1)
    }

    /// Removes a key with the given multiplicity, subtracting it from the
    /// count of every node along the key's path.
    ///
    /// Presence is checked through [`contains`](Self::contains), which is a
    /// prefix test: a key that was never inserted as a complete word can
    /// still be removed while it is a live prefix of longer keys. When a
    /// node's count would drop to zero, the node is unlinked from its
    /// parent and the walk stops; the detached subtree is dropped whole,
    /// without decrementing its deeper nodes.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to remove.
    /// * `multiplicity` - Positive weight subtracted from every node on
    ///   the path.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The removal succeeded (always, once validated).
    /// * `Err(HeluTrieError)` - If the key is empty or not present, or the
    ///   multiplicity is zero. Rejected calls leave the trie unchanged.
    pub fn remove_with_multiplicity<K>(&mut self, key: K, multiplicity: u64) -> HeluTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if !self.contains(key)? {
            return Err(HeluTrieError::KeyNotFound(key.to_string()));
        }

        if multiplicity == 0 {
            return Err(HeluTrieError::ZeroMultiplicity);
        }

        let mut node = &mut self.root;
        for ch in key.chars() {
            match node.children.entry(ch) {
                Entry::Occupied(entry) => {
                    // Counts are unsigned; comparing before subtracting is
                    // the same test as decrementing and checking for <= 0.
                    if entry.get().count <= multiplicity {
                        entry.remove();
                        trace!(
                            target: TRIE_LOG_TARGET,
                            key = %key,
                            multiplicity,
                            pruned_at = %ch,
                            "Removed key and pruned subtree"
                        );
                        return Ok(true);
                    }
                    let child = entry.into_mut();
                    child.count -= multiplicity;
                    node = child;
                }
                // The presence gate guarantees the full path exists.
                Entry::Vacant(_) => return Err(HeluTrieError::KeyNotFound(key.to_string())),
            }
        }

        trace!(target: TRIE_LOG_TARGET, key = %key, multiplicity, "Removed key");
        Ok(true)
    }

    /// Returns the prefix-frequency count of a key: the sum of
    /// multiplicities of every insertion whose key starts with `key`,
    /// including insertions of `key` itself.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to count.
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - The count at the key's final node, or 0 if the path
    ///   does not exist.
    /// * `Err(HeluTrieError)` - If the key is empty.
    pub fn count<K>(&self, key: K) -> HeluTrieResult<u64>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(HeluTrieError::EmptyKey);
        }

        Ok(self.lookup(key).map_or(0, |node| node.count))
    }

    /// Checks whether a key is present as a prefix.
    ///
    /// This answers "is `key` a prefix of something inserted (or itself
    /// inserted)", not "was `key` inserted as a complete word"; it is
    /// exactly `count(key) > 0`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to check.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the key's path is live.
    /// * `Err(HeluTrieError)` - If the key is empty.
    pub fn contains<K>(&self, key: K) -> HeluTrieResult<bool>
    where
        K: AsRef<str>,
    {
        Ok(self.count(key)? > 0)
    }

    /// Returns whether the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Drops every node, leaving an empty trie with the same configuration.
    pub fn clear(&mut self) {
        self.root = TrieNode::with_capacity(self.config.child_capacity);
        debug!(target: TRIE_LOG_TARGET, "Cleared trie");
    }

    /// Returns the configuration the trie was built with.
    pub fn config(&self) -> &HeluTrieConfig {
        &self.config
    }

    /// Walks the key's path and returns its final node, if the whole path
    /// exists.
    fn lookup(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

impl Default for HeluTrie {
    fn default() -> Self {
        Self::new()
    }
}
