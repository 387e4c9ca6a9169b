//! Node implementation for the Lau Trie.
//!
//! A node is a plain data holder: an occurrence counter and the edges to its
//! children. All mutation is performed by [`LauTrie`](super::LauTrie) directly on
//! these fields.

use fnv::FnvHashMap;

use super::word::Symbol;

/// A vertex of the Lau Trie.
///
/// The path of edge labels from the root to a node spells the word the node
/// stands for. `count` records how many times that exact word is stored.
///
/// `Clone` and `Drop` walk the subtree with an explicit stack, so a single
/// word may be as deep as memory allows.
#[derive(Debug)]
pub struct TrieNode<S: Symbol> {
    /// Number of stored occurrences of the word ending exactly here
    pub count: usize,

    /// Map of symbols to child nodes
    pub children: FnvHashMap<S, TrieNode<S>>,
}

impl<S: Symbol> TrieNode<S> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            count: 0,
            children: FnvHashMap::default(),
        }
    }

    /// Returns `true` when the node carries no information: no occurrences and
    /// no children. Such a node must not stay reachable from the root.
    pub fn is_vacant(&self) -> bool {
        self.count == 0 && self.children.is_empty()
    }
}

impl<S: Symbol> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A node being copied whose children are not all copied yet.
struct CloneFrame<'a, S: Symbol> {
    symbol: Option<S>,
    pending: std::collections::hash_map::Iter<'a, S, TrieNode<S>>,
    copy: TrieNode<S>,
}

impl<'a, S: Symbol> CloneFrame<'a, S> {
    fn new(symbol: Option<S>, source: &'a TrieNode<S>) -> Self {
        let mut children = FnvHashMap::default();
        children.reserve(source.children.len());
        Self {
            symbol,
            pending: source.children.iter(),
            copy: TrieNode {
                count: source.count,
                children,
            },
        }
    }
}

impl<S: Symbol> Clone for TrieNode<S> {
    fn clone(&self) -> Self {
        let mut stack = vec![CloneFrame::new(None, self)];
        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.pending.next(),
                None => return Self::new(),
            };
            if let Some((symbol, child)) = next {
                stack.push(CloneFrame::new(Some(*symbol), child));
                continue;
            }

            // Every child of the top frame is copied; hand it to its parent.
            let Some(done) = stack.pop() else {
                return Self::new();
            };
            match (stack.last_mut(), done.symbol) {
                (Some(parent), Some(symbol)) => {
                    parent.copy.children.insert(symbol, done.copy);
                }
                _ => return done.copy,
            }
        }
    }
}

impl<S: Symbol> Drop for TrieNode<S> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<S>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
            // `node` now has no children, so dropping it does not recurse.
        }
    }
}
