//! Node implementation for the Helu Counting Trie.
//!
//! This module provides the TrieNode structure used in the Helu Trie
//! implementation. Nodes are the fundamental building blocks of the trie,
//! each carrying the prefix count and references to child nodes.

use fnv::FnvHashMap;

/// A node in the Helu Counting Trie.
///
/// Each node represents one character position along some inserted key. The
/// character itself lives in the parent's child map key, so the root carries
/// no character and represents the empty prefix.
#[derive(Debug)]
pub struct TrieNode {
    /// Sum of multiplicities of every insertion whose key passes through
    /// or terminates at this node
    pub count: u64,

    /// Whether some inserted key terminates exactly at this node
    pub is_word_ending: bool,

    /// Map of characters to child nodes
    pub children: FnvHashMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty trie node whose child map reserves space for
    /// `capacity` entries up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count: 0,
            is_word_ending: false,
            children: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
