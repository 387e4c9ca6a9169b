//! Script command parsing.
//!
//! A script holds one command per line. The first whitespace-separated token is
//! the keyword (case-insensitive); everything after it, trimmed, is the
//! argument. The argument `""` stands for the empty word.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::command::CommandError;

/// Literal used in scripts to denote the empty word.
pub const EMPTY_WORD: &str = "\"\"";

/// A single parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store one more occurrence of a word
    Insert(String),
    /// Report the occurrence count of a word
    Search(String),
    /// Remove one occurrence of a word
    Remove(String),
    /// Remove every occurrence of a word
    Purge(String),
    /// Report total occurrences of words starting with a prefix
    Prefix(String),
    /// List stored words starting with a prefix
    List(String),
    /// Report trie bookkeeping counters
    Stats,
    /// Drop every stored word
    Clear,
}

impl Command {
    /// Parses one script line.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` for blank lines and `#` comments
    /// * `Ok(Some(Command))` for a well-formed command
    /// * `Err(CommandError)` otherwise
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }

    /// Returns the canonical keyword of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Search(_) => "search",
            Self::Remove(_) => "remove",
            Self::Purge(_) => "purge",
            Self::Prefix(_) => "prefix",
            Self::List(_) => "list",
            Self::Stats => "stats",
            Self::Clear => "clear",
        }
    }

    /// Returns the word or prefix argument, if the command has one.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::Insert(word)
            | Self::Search(word)
            | Self::Remove(word)
            | Self::Purge(word)
            | Self::Prefix(word)
            | Self::List(word) => Some(word),
            Self::Stats | Self::Clear => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = match line.find(char::is_whitespace) {
            Some(at) => line.split_at(at),
            None => (line, ""),
        };
        let rest = rest.trim();
        let keyword = keyword.to_lowercase();

        let required = |rest: &str| -> Result<String, CommandError> {
            match rest {
                "" => Err(CommandError::MissingArgument(keyword.clone())),
                EMPTY_WORD => Ok(String::new()),
                word => Ok(word.to_string()),
            }
        };
        let optional = |rest: &str| -> String {
            match rest {
                EMPTY_WORD => String::new(),
                word => word.to_string(),
            }
        };
        let bare = |command: Command| -> Result<Command, CommandError> {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::UnexpectedArgument {
                    command: keyword.clone(),
                    argument: rest.to_string(),
                })
            }
        };

        match keyword.as_str() {
            "insert" | "add" => required(rest).map(Self::Insert),
            "search" | "count" => required(rest).map(Self::Search),
            "remove" | "del" => required(rest).map(Self::Remove),
            "purge" => required(rest).map(Self::Purge),
            "prefix" => Ok(Self::Prefix(optional(rest))),
            "list" => Ok(Self::List(optional(rest))),
            "stats" => bare(Self::Stats),
            "clear" => bare(Self::Clear),
            _ => Err(CommandError::UnknownCommand(keyword.clone())),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.argument() {
            Some("") => write!(f, "{} {}", self.name(), EMPTY_WORD),
            Some(argument) => write!(f, "{} {}", self.name(), argument),
            None => write!(f, "{}", self.name()),
        }
    }
}
