//! Lau Trie Library
//!
//! This library contains a counting prefix tree together with the pieces that
//! host it: configuration, error reporting, and a command-script session.
//! The binary crate drives sessions from the command line, but the trie can be
//! used on its own as a dependency.
//!
//! # Architecture
//!
//! - `data_structures`: the trie, total over its inputs and free of I/O
//! - `script`: parsing and executing command scripts against a trie
//! - `config` and `error`: the ambient layers shared by the host
//!
//! # Example
//!
//! ```
//! use lau_trie_lib::data_structures::LauTrie;
//!
//! let mut trie = LauTrie::new();
//! trie.insert("book");
//! trie.insert("bookshelf");
//! assert_eq!(trie.search("book"), 1);
//! assert_eq!(trie.count_prefix("book"), 2);
//!
//! trie.remove("bookshelf");
//! assert_eq!(trie.search("bookshelf"), 0);
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod script;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lau Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter as the global reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
