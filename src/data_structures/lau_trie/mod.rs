//! Lau Trie Implementation
//!
//! This module provides a counting prefix tree: a multiset of words over an
//! alphabet of atomic symbols. The same word may be stored many times; each
//! node keeps the number of occurrences of the word that ends on it.
//!
//! Removal decrements that count and prunes the branch it leaves behind, so
//! the tree never keeps nodes that carry neither an occurrence nor a child.
//!
//! `LauTrie` itself is single-threaded. [`SharedLauTrie`] wraps it behind one
//! reader-writer lock for callers that need to share it between threads.

mod node;
mod shared;
mod stats;
mod word;

use std::fmt;

use tracing::{debug, trace};

use node::TrieNode;
pub use shared::SharedLauTrie;
pub use stats::TrieStats;
pub use word::{Symbol, Word};

/// Lau Trie is a multiset of symbol sequences stored as a prefix tree.
///
/// Key features:
/// * Occurrence counting per word (multiset semantics)
/// * Removal with cascading pruning of vacant branches
/// * Prefix queries: occurrence totals and word enumeration
/// * Generic over the symbol type (`char` for text, `u8` for raw bytes)
///
/// Every operation is total: absent words count as zero and removing them is a
/// no-op.
#[derive(Clone)]
pub struct LauTrie<S: Symbol = char> {
    /// The root node, standing for the empty word
    root: TrieNode<S>,

    /// Nodes below the root
    nodes: usize,

    /// Words with a non-zero count
    distinct: usize,

    /// Sum of all counts
    occurrences: usize,
}

impl<S: Symbol> LauTrie<S> {
    /// Creates a new empty `LauTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            nodes: 0,
            distinct: 0,
            occurrences: 0,
        }
    }

    /// Stores one more occurrence of `word`.
    ///
    /// Creates one node for every symbol that has no edge yet at its position.
    /// The empty word is counted on the root.
    pub fn insert<W>(&mut self, word: &W)
    where
        W: Word<Symbol = S> + ?Sized,
    {
        let mut created = 0;
        let mut depth = 0;
        let mut node = &mut self.root;

        for symbol in word.symbols() {
            node = node.children.entry(symbol).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
            depth += 1;
        }

        node.count += 1;
        let count = node.count;

        if count == 1 {
            self.distinct += 1;
        }
        self.nodes += created;
        self.occurrences += 1;

        trace!(depth, created, count, "inserted word");
    }

    /// Returns how many times `word` is stored, 0 if it never was.
    ///
    /// A word that only exists as a prefix of other words counts 0.
    pub fn search<W>(&self, word: &W) -> usize
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.find(word.symbols()).map_or(0, |node| node.count)
    }

    /// Checks if `word` is stored at least once.
    pub fn contains<W>(&self, word: &W) -> bool
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.search(word) > 0
    }

    /// Removes one occurrence of `word`.
    ///
    /// Returns `true` if an occurrence was removed. Removing a word whose path
    /// is missing, or whose count is already zero, changes nothing.
    pub fn remove<W>(&mut self, word: &W) -> bool
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.take(word, 1) == 1
    }

    /// Removes every occurrence of `word` and returns how many there were.
    pub fn remove_all<W>(&mut self, word: &W) -> usize
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.take(word, usize::MAX)
    }

    /// Returns the total number of occurrences of stored words that start with
    /// `prefix`. The empty prefix yields [`len`](Self::len).
    pub fn count_prefix<W>(&self, prefix: &W) -> usize
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.find(prefix.symbols()).map_or(0, occurrences_below)
    }

    /// Checks if at least one stored word starts with `prefix`.
    pub fn starts_with<W>(&self, prefix: &W) -> bool
    where
        W: Word<Symbol = S> + ?Sized,
    {
        // Only the root can be vacant while reachable.
        self.find(prefix.symbols())
            .map_or(false, |node| !node.is_vacant())
    }

    /// Finds all stored words with a given prefix, along with their counts.
    ///
    /// The result is sorted by symbol sequence.
    pub fn words_with_prefix<W>(&self, prefix: &W) -> Vec<(Vec<S>, usize)>
    where
        W: Word<Symbol = S> + ?Sized,
        S: Ord,
    {
        self.collect_from(prefix.symbols().collect())
    }

    /// Returns every stored word and its count, sorted by symbol sequence.
    pub fn words(&self) -> Vec<(Vec<S>, usize)>
    where
        S: Ord,
    {
        self.collect_from(Vec::new())
    }

    /// Returns the total number of stored occurrences.
    pub fn len(&self) -> usize {
        self.occurrences
    }

    /// Checks if the trie stores no occurrence at all.
    pub fn is_empty(&self) -> bool {
        self.occurrences == 0
    }

    /// Returns the number of different words with a non-zero count.
    pub fn distinct_len(&self) -> usize {
        self.distinct
    }

    /// Returns the number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Returns a snapshot of the bookkeeping counters.
    pub fn stats(&self) -> TrieStats {
        TrieStats {
            occurrences: self.occurrences,
            distinct_words: self.distinct,
            nodes: self.nodes,
        }
    }

    /// Drops every node and resets all counters.
    pub fn clear(&mut self) {
        debug!(nodes = self.nodes, occurrences = self.occurrences, "clearing trie");
        *self = Self::new();
    }

    /// Follows `symbols` from the root, stopping at the first missing edge.
    fn find<I>(&self, symbols: I) -> Option<&TrieNode<S>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut node = &self.root;
        for symbol in symbols {
            node = node.children.get(&symbol)?;
        }
        Some(node)
    }

    /// Removes up to `limit` occurrences of `word`, pruning what becomes vacant.
    ///
    /// The downward walk records the shape of every node on the path. Once the
    /// new terminal count is known, the shapes tell how far up the vacancy
    /// cascades: the terminal goes if it ends with no count and no children, and
    /// each ancestor goes with it while its only child is the one being dropped
    /// and its own count is zero. The highest such node is detached from its
    /// parent with a single edge removal, which drops the whole chain below it.
    fn take<W>(&mut self, word: &W, limit: usize) -> usize
    where
        W: Word<Symbol = S> + ?Sized,
    {
        let path: Vec<S> = word.symbols().collect();

        // (count, children) of the node at depth `i + 1`
        let mut shape = Vec::with_capacity(path.len());
        let mut node = &self.root;
        for symbol in &path {
            match node.children.get(symbol) {
                Some(child) => {
                    shape.push((child.count, child.children.len()));
                    node = child;
                }
                None => {
                    trace!(depth = shape.len(), "path absent, nothing to remove");
                    return 0;
                }
            }
        }

        let removed = node.count.min(limit);
        if removed == 0 {
            trace!(depth = path.len(), "word only stored as a prefix, nothing to remove");
            return 0;
        }
        let remaining = node.count - removed;

        let mut cut = None;
        if remaining == 0 && node.children.is_empty() && !path.is_empty() {
            cut = Some(path.len());
            for depth in (1..path.len()).rev() {
                match shape[depth - 1] {
                    (0, 1) => cut = Some(depth),
                    _ => break,
                }
            }
        }

        match cut {
            Some(depth) => {
                if let Some(parent) = descend_mut(&mut self.root, &path[..depth - 1]) {
                    parent.children.remove(&path[depth - 1]);
                }
                let pruned = path.len() - depth + 1;
                self.nodes -= pruned;
                debug!(depth, pruned, "pruned vacant branch");
            }
            None => {
                if let Some(terminal) = descend_mut(&mut self.root, &path) {
                    terminal.count = remaining;
                }
            }
        }

        if remaining == 0 {
            self.distinct -= 1;
        }
        self.occurrences -= removed;

        trace!(depth = path.len(), removed, remaining, "removed word");
        removed
    }

    fn collect_from(&self, mut path: Vec<S>) -> Vec<(Vec<S>, usize)>
    where
        S: Ord,
    {
        let mut result = Vec::new();
        if let Some(node) = self.find(path.clone()) {
            collect_words(node, &mut path, &mut result);
        }
        result.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        result
    }
}

impl<S: Symbol> fmt::Debug for LauTrie<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LauTrie")
            .field("nodes", &self.nodes)
            .field("distinct", &self.distinct)
            .field("occurrences", &self.occurrences)
            .finish_non_exhaustive()
    }
}

impl<S: Symbol> Default for LauTrie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'w, S, W> Extend<&'w W> for LauTrie<S>
where
    S: Symbol,
    W: Word<Symbol = S> + ?Sized + 'w,
{
    fn extend<I: IntoIterator<Item = &'w W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<'w, S, W> FromIterator<&'w W> for LauTrie<S>
where
    S: Symbol,
    W: Word<Symbol = S> + ?Sized + 'w,
{
    fn from_iter<I: IntoIterator<Item = &'w W>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}

fn descend_mut<'a, S: Symbol>(
    mut node: &'a mut TrieNode<S>,
    path: &[S],
) -> Option<&'a mut TrieNode<S>> {
    for symbol in path {
        node = node.children.get_mut(symbol)?;
    }
    Some(node)
}

fn occurrences_below<S: Symbol>(node: &TrieNode<S>) -> usize {
    let mut total = 0;
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        total += node.count;
        stack.extend(node.children.values());
    }
    total
}

enum Visit<'a, S: Symbol> {
    Enter(S, &'a TrieNode<S>),
    Leave,
}

/// Collects every counted word below `node`, each prefixed with `path`.
///
/// Walks with an explicit stack; `path` holds the symbols of the node being
/// visited and is restored on return.
fn collect_words<S: Symbol>(
    node: &TrieNode<S>,
    path: &mut Vec<S>,
    result: &mut Vec<(Vec<S>, usize)>,
) {
    if node.count > 0 {
        result.push((path.clone(), node.count));
    }

    let mut stack: Vec<Visit<'_, S>> = node
        .children
        .iter()
        .map(|(symbol, child)| Visit::Enter(*symbol, child))
        .collect();
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(symbol, node) => {
                path.push(symbol);
                if node.count > 0 {
                    result.push((path.clone(), node.count));
                }
                stack.push(Visit::Leave);
                stack.extend(
                    node.children
                        .iter()
                        .map(|(symbol, child)| Visit::Enter(*symbol, child)),
                );
            }
            Visit::Leave => {
                path.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(words: Vec<(Vec<char>, usize)>) -> Vec<(String, usize)> {
        words
            .into_iter()
            .map(|(symbols, count)| (symbols.into_iter().collect(), count))
            .collect()
    }

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = LauTrie::new();

        assert!(trie.is_empty());

        trie.insert("hello");
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());

        assert_eq!(trie.search("hello"), 1);
        assert!(trie.contains("hello"));
        assert_eq!(trie.search("nonexistent"), 0);
        assert!(!trie.contains("nonexistent"));

        // Case is significant: symbols are compared as-is
        assert_eq!(trie.search("HELLO"), 0);

        trie.insert("hello");
        assert_eq!(trie.search("hello"), 2);
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.distinct_len(), 1);

        assert!(trie.remove("hello"));
        assert!(trie.remove("hello"));
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 0);
        assert!(!trie.remove("hello"));
    }

    #[test]
    fn test_reference_usage() {
        let trie: LauTrie = ["apple", "application", "board", "book", "booked", "bookshelf"]
            .into_iter()
            .collect();

        assert_eq!(trie.search("apple"), 1);
        assert_eq!(trie.search("book"), 1);
        assert_eq!(trie.count_prefix("book"), 3);

        let mut trie = trie;
        trie.remove("bookshelf");

        assert_eq!(trie.count_prefix("book"), 2);
        assert_eq!(trie.search("book"), 1);
        assert_eq!(trie.search("bookshelf"), 0);
        assert_eq!(trie.search("booked"), 1);
    }

    #[test]
    fn test_prefix_only_path_counts_zero() {
        let mut trie = LauTrie::new();
        trie.insert("application");

        assert_eq!(trie.search("app"), 0);
        assert!(trie.starts_with("app"));
        assert!(!trie.starts_with("apx"));

        // Removing a pure prefix neither decrements nor prunes anything
        let nodes = trie.node_count();
        assert!(!trie.remove("app"));
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.search("application"), 1);
    }

    #[test]
    fn test_pruning_stops_at_shared_prefix() {
        let mut trie = LauTrie::new();
        trie.insert("apple");
        trie.insert("application");
        // a-p-p-l shared, then "e" and "ication"
        assert_eq!(trie.node_count(), 4 + 1 + 7);

        assert!(trie.remove("apple"));
        assert_eq!(trie.node_count(), 4 + 7);
        assert_eq!(trie.search("apple"), 0);
        assert_eq!(trie.search("application"), 1);
        assert!(trie.starts_with("appl"));
        assert!(!trie.starts_with("apple"));
    }

    #[test]
    fn test_pruning_stops_at_counted_ancestor() {
        let mut trie = LauTrie::new();
        trie.insert("book");
        trie.insert("bookshelf");
        assert_eq!(trie.node_count(), 9);

        trie.remove("bookshelf");
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.search("book"), 1);

        trie.remove("book");
        assert_eq!(trie.node_count(), 0);
        assert!(trie.words().is_empty());
    }

    #[test]
    fn test_inner_word_keeps_its_children() {
        let mut trie = LauTrie::new();
        trie.insert("book");
        trie.insert("booked");

        trie.remove("book");
        assert_eq!(trie.search("book"), 0);
        assert_eq!(trie.search("booked"), 1);
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_empty_word_lives_on_root() {
        let mut trie = LauTrie::<char>::new();
        trie.insert("");
        assert_eq!(trie.search(""), 1);
        assert_eq!(trie.node_count(), 0);
        assert_eq!(trie.len(), 1);

        trie.insert("a");
        assert!(trie.remove(""));
        assert_eq!(trie.search(""), 0);
        assert_eq!(trie.search("a"), 1);
        assert!(!trie.remove(""));
    }

    #[test]
    fn test_remove_all() {
        let mut trie = LauTrie::new();
        for _ in 0..5 {
            trie.insert("kai");
        }
        trie.insert("kaimana");

        assert_eq!(trie.remove_all("kai"), 5);
        assert_eq!(trie.search("kai"), 0);
        assert_eq!(trie.search("kaimana"), 1);
        assert_eq!(trie.remove_all("kai"), 0);
        assert_eq!(trie.len(), 1);

        assert_eq!(trie.remove_all("kaimana"), 1);
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn test_trie_prefix_search() {
        let mut trie = LauTrie::new();

        trie.insert("apple");
        trie.insert("application");
        trie.insert("apply");
        trie.insert("apply");
        trie.insert("banana");

        let results = text(trie.words_with_prefix("app"));
        assert_eq!(
            results,
            vec![
                ("apple".to_string(), 1),
                ("application".to_string(), 1),
                ("apply".to_string(), 2),
            ]
        );
        assert_eq!(trie.count_prefix("app"), 4);
        assert_eq!(trie.count_prefix(""), 5);

        assert!(trie.words_with_prefix("orange").is_empty());
        assert_eq!(trie.count_prefix("orange"), 0);
        assert_eq!(trie.words().len(), 4);
    }

    #[test]
    fn test_byte_trie() {
        let mut trie = LauTrie::<u8>::new();
        trie.insert(b"\x00\xff");
        trie.insert("hé".as_bytes());

        assert_eq!(trie.search(b"\x00\xff"), 1);
        assert_eq!(trie.search(&vec![b'h', 0xC3, 0xA9]), 1);
        assert_eq!(trie.count_prefix(b"h"), 1);
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_stats_and_clear() {
        let mut trie: LauTrie = ["to", "tea", "tea", "ten"].into_iter().collect();
        assert_eq!(
            trie.stats(),
            TrieStats {
                occurrences: 4,
                distinct_words: 3,
                nodes: 5,
            }
        );

        trie.clear();
        assert_eq!(trie.stats(), TrieStats::default());
        assert_eq!(trie.search("tea"), 0);
    }
}
