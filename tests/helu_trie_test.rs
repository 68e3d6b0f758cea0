// Copyright (c) 2025 Helu Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Helu Counting Trie.
//! Exercises the public API end to end, including the caller-side
//! serialization pattern the crate prescribes for shared access.

use std::sync::{Arc, Barrier};
use std::thread;

use parking_lot::Mutex;

use helu_trie::{HeluTrie, HeluTrieConfig, HeluTrieError};

/// Initialize log capture for the test process. Safe to call from every
/// test; only the first call installs the subscriber.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_names(true)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_trie_lifecycle() {
    init_tracing();
    let mut trie = HeluTrie::new();

    assert!(trie.is_empty());

    assert!(!trie.insert("helu").unwrap());
    assert!(trie.insert_with_multiplicity("helumanu", 2).unwrap());

    assert_eq!(trie.count("helu").unwrap(), 3);
    assert_eq!(trie.count("helumanu").unwrap(), 2);
    assert!(trie.contains("hel").unwrap());

    assert!(trie.remove_with_multiplicity("helumanu", 2).unwrap());
    assert_eq!(trie.count("helu").unwrap(), 1);
    assert!(!trie.contains("helumanu").unwrap());

    assert!(trie.remove("helu").unwrap());
    assert!(trie.is_empty());

    assert!(!helu_trie::VERSION.is_empty());
}

#[test]
fn test_prefix_retention_after_exact_removal() {
    init_tracing();
    let mut trie = HeluTrie::new();

    trie.insert("foo").unwrap();
    trie.insert("foot").unwrap();

    // Removing "foo" leaves it reachable as a prefix of "foot"
    assert!(trie.remove("foo").unwrap());
    assert!(trie.contains("foo").unwrap());
    assert_eq!(trie.count("foo").unwrap(), 1);
    assert_eq!(trie.count("foot").unwrap(), 1);

    // Removing "foot" drains the whole path
    assert!(trie.remove("foot").unwrap());
    assert!(!trie.contains("foo").unwrap());
    assert!(trie.is_empty());
}

#[test]
fn test_repeated_insert_and_removal_counts() {
    init_tracing();
    let mut trie = HeluTrie::new();

    trie.insert("foo").unwrap();
    trie.insert("foo").unwrap();
    trie.insert("foo").unwrap();
    assert_eq!(trie.count("foo").unwrap(), 3);

    trie.remove("foo").unwrap();
    assert_eq!(trie.count("foo").unwrap(), 2);

    trie.remove("foo").unwrap();
    trie.remove("foo").unwrap();
    assert!(!trie.contains("foo").unwrap());
    assert_eq!(
        trie.remove("foo"),
        Err(HeluTrieError::KeyNotFound("foo".to_string()))
    );
}

#[test]
fn test_error_surface() {
    init_tracing();
    let mut trie = HeluTrie::new();

    assert_eq!(trie.insert(""), Err(HeluTrieError::EmptyKey));
    assert_eq!(trie.count(""), Err(HeluTrieError::EmptyKey));
    assert_eq!(trie.contains(""), Err(HeluTrieError::EmptyKey));
    assert_eq!(
        trie.insert_with_multiplicity("key", 0),
        Err(HeluTrieError::ZeroMultiplicity)
    );
    assert_eq!(
        trie.remove("ghost"),
        Err(HeluTrieError::KeyNotFound("ghost".to_string()))
    );
    assert!(trie.is_empty());
}

#[test]
fn test_configured_trie() {
    init_tracing();
    let config = HeluTrieConfig::new()
        .with_max_key_length(8)
        .with_child_capacity(2);
    let mut trie = HeluTrie::with_config(config);

    assert_eq!(trie.config().max_key_length, Some(8));
    assert_eq!(trie.config().child_capacity, 2);

    assert!(!trie.insert("makani").unwrap());
    assert_eq!(
        trie.insert("makai_road"),
        Err(HeluTrieError::KeyTooLong {
            key: "makai_road".to_string(),
            max_length: 8,
        })
    );
    assert_eq!(trie.count("makani").unwrap(), 1);

    trie.clear();
    assert!(trie.is_empty());
    assert_eq!(trie.config().max_key_length, Some(8));
}

/// Shares one trie between threads behind an exclusive lock, the
/// serialization pattern callers are expected to provide themselves.
#[test]
fn test_serialized_shared_access() {
    init_tracing();

    const THREAD_COUNT: usize = 8;
    const KEYS_PER_THREAD: usize = 50;

    let trie = Arc::new(Mutex::new(HeluTrie::new()));
    let barrier = Arc::new(Barrier::new(THREAD_COUNT + 1));
    let mut handles = Vec::with_capacity(THREAD_COUNT);

    for t in 0..THREAD_COUNT {
        let trie_clone: Arc<Mutex<HeluTrie>> = Arc::clone(&trie);
        let barrier_clone: Arc<Barrier> = Arc::clone(&barrier);

        let handle = thread::spawn(move || {
            // Wait for all threads to be ready
            barrier_clone.wait();

            for j in 0..KEYS_PER_THREAD {
                let key = format!("key_{}_{}", t, j);
                let mut guard = trie_clone.lock();
                guard.insert(&key).unwrap();
            }

            // Wait for all threads to finish inserting
            barrier_clone.wait();

            // Every thread observes its own keys and the shared prefix
            let guard = trie_clone.lock();
            for j in 0..KEYS_PER_THREAD {
                let key = format!("key_{}_{}", t, j);
                assert!(guard.contains(&key).unwrap());
            }
            assert_eq!(
                guard.count(&format!("key_{}_", t)).unwrap(),
                KEYS_PER_THREAD as u64
            );
        });

        handles.push(handle);
    }

    // Start the threads, then wait for the insert phase to finish
    barrier.wait();
    barrier.wait();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    // The shared "key_" prefix accumulated every insertion
    let mut guard = trie.lock();
    assert_eq!(
        guard.count("key_").unwrap(),
        (THREAD_COUNT * KEYS_PER_THREAD) as u64
    );

    // Drain the even threads' keys and re-check the bookkeeping
    for t in (0..THREAD_COUNT).step_by(2) {
        for j in 0..KEYS_PER_THREAD {
            let key = format!("key_{}_{}", t, j);
            assert!(guard.remove(&key).unwrap());
        }
    }
    assert_eq!(
        guard.count("key_").unwrap(),
        (THREAD_COUNT * KEYS_PER_THREAD / 2) as u64
    );
}
