//! Data structures for Lau Trie.
//!
//! This module contains the counting prefix tree and its thread-shareable
//! handle. All implementations are free of unsafe code.

pub mod lau_trie;

// Re-export common data structures
pub use lau_trie::{LauTrie, SharedLauTrie, TrieStats, Word};
