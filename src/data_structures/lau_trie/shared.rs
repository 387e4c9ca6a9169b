//! Thread-shareable handle to a Lau Trie.
//!
//! The trie has no internal locking. This handle guards the whole tree with a
//! single reader-writer lock: queries take the read lock, mutations the write
//! lock. Every operation still runs to completion before the lock is released.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{LauTrie, Symbol, TrieStats, Word};

/// A cloneable, thread-safe handle to a [`LauTrie`].
///
/// Clones share the same underlying trie.
#[derive(Debug, Clone)]
pub struct SharedLauTrie<S: Symbol = char> {
    inner: Arc<RwLock<LauTrie<S>>>,
}

impl<S: Symbol> SharedLauTrie<S> {
    /// Creates a handle to a new empty trie.
    pub fn new() -> Self {
        Self::from_trie(LauTrie::new())
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: LauTrie<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Stores one more occurrence of `word`.
    pub fn insert<W>(&self, word: &W)
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.inner.write().insert(word);
    }

    /// Returns how many times `word` is stored.
    pub fn search<W>(&self, word: &W) -> usize
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.inner.read().search(word)
    }

    /// Removes one occurrence of `word`, returning whether one was removed.
    pub fn remove<W>(&self, word: &W) -> bool
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.inner.write().remove(word)
    }

    /// Removes every occurrence of `word`.
    pub fn remove_all<W>(&self, word: &W) -> usize
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.inner.write().remove_all(word)
    }

    /// Returns the total occurrences of words starting with `prefix`.
    pub fn count_prefix<W>(&self, prefix: &W) -> usize
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.inner.read().count_prefix(prefix)
    }

    /// Returns the total number of stored occurrences.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the trie stores no occurrence.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a snapshot of the bookkeeping counters.
    pub fn stats(&self) -> TrieStats {
        self.inner.read().stats()
    }

    /// Runs `f` with shared access to the trie.
    pub fn read<R>(&self, f: impl FnOnce(&LauTrie<S>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the trie, for multi-step updates that
    /// must not interleave with other callers.
    pub fn write<R>(&self, f: impl FnOnce(&mut LauTrie<S>) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Returns the trie if this is the last handle, or the handle otherwise.
    pub fn try_into_inner(self) -> Result<LauTrie<S>, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| Self { inner })
    }
}

impl<S: Symbol> Default for SharedLauTrie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> From<LauTrie<S>> for SharedLauTrie<S> {
    fn from(trie: LauTrie<S>) -> Self {
        Self::from_trie(trie)
    }
}
