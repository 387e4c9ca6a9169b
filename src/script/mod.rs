//! Command-script host for the Lau Trie.
//!
//! Scripts are plain text, one command per line, read from a file or stdin.
//! A [`Session`] applies them to a trie and writes one result per command.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::{Outcome, RunSummary, Session, WordCount};
