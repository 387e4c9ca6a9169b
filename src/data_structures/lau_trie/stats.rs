//! Size accounting for the Lau Trie.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A snapshot of the bookkeeping counters of a [`LauTrie`](super::LauTrie).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Total stored occurrences (multiset size)
    pub occurrences: usize,

    /// Words with a count greater than zero
    pub distinct_words: usize,

    /// Nodes below the root
    pub nodes: usize,
}

impl Display for TrieStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "occurrences={} distinct={} nodes={}",
            self.occurrences, self.distinct_words, self.nodes
        )
    }
}
