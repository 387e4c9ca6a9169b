//! Script sessions.
//!
//! A session owns one trie and applies script commands to it. It is the
//! hosting collaborator of the trie: it decides how words are read (alphabet,
//! case folding, length limit) and how counts are reported.

use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, info_span, warn};

use super::command::Command;
use crate::config::{OutputFormat, SessionConfig, SymbolMode};
use crate::data_structures::lau_trie::{LauTrie, Symbol, TrieStats, Word};
use crate::error::command::CommandError;
use crate::error::{ErrorContext, ErrorReporter, GlobalErrorReporter, LauResult};

/// A word and the number of times it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// The stored word
    pub word: String,
    /// Its occurrence count
    pub count: usize,
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    /// A word was inserted; `count` is its new count
    Inserted { word: String, count: usize },
    /// A word was looked up
    Found { word: String, count: usize },
    /// Occurrences of a word were removed; `count` is what remains
    Removed {
        word: String,
        removed: usize,
        count: usize,
    },
    /// Total occurrences under a prefix
    PrefixCount { prefix: String, count: usize },
    /// Words stored under a prefix
    Listed { prefix: String, words: Vec<WordCount> },
    /// Bookkeeping counters
    Stats(TrieStats),
    /// The trie was emptied; `dropped` occurrences were discarded
    Cleared { dropped: usize },
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inserted { word, count } => write!(f, "inserted {word:?} count={count}"),
            Self::Found { word, count } => write!(f, "{word:?} {count}"),
            Self::Removed {
                word,
                removed,
                count,
            } => write!(f, "removed {removed} of {word:?} count={count}"),
            Self::PrefixCount { prefix, count } => write!(f, "prefix {prefix:?} {count}"),
            Self::Listed { prefix, words } if words.is_empty() => {
                write!(f, "no words with prefix {prefix:?}")
            }
            Self::Listed { words, .. } => {
                for (i, entry) in words.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{:?} {}", entry.word, entry.count)?;
                }
                Ok(())
            }
            Self::Stats(stats) => write!(f, "{stats}"),
            Self::Cleared { dropped } => write!(f, "cleared {dropped} occurrences"),
        }
    }
}

/// A failed script line, as written to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ErrorLine<'a> {
    op: &'static str,
    line: usize,
    message: &'a str,
}

/// Counters for one script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Commands that executed successfully
    pub executed: usize,
    /// Commands that failed to parse or were rejected
    pub failed: usize,
}

#[derive(Debug)]
enum Store {
    Chars(LauTrie<char>),
    Bytes(LauTrie<u8>),
}

/// A script session owning one trie.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    store: Store,
    reporter: Arc<dyn ErrorReporter>,
}

impl Session {
    /// Creates a session with an empty trie over the configured alphabet.
    ///
    /// Errors are reported through the global error reporter.
    pub fn new(config: SessionConfig) -> Self {
        let store = match config.symbols {
            SymbolMode::Chars => Store::Chars(LauTrie::new()),
            SymbolMode::Bytes => Store::Bytes(LauTrie::new()),
        };
        Self {
            config,
            store,
            reporter: Arc::new(GlobalErrorReporter),
        }
    }

    /// Replaces the error reporter used by [`run`](Self::run).
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the bookkeeping counters of the session's trie.
    pub fn stats(&self) -> TrieStats {
        match &self.store {
            Store::Chars(trie) => trie.stats(),
            Store::Bytes(trie) => trie.stats(),
        }
    }

    /// Parses and executes one script line. Blank lines and comments yield
    /// `Ok(None)`.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Outcome>, CommandError> {
        match Command::parse_line(line)? {
            Some(command) => self.execute(&command).map(Some),
            None => Ok(None),
        }
    }

    /// Executes one command against the trie.
    ///
    /// The word is case-folded if configured, then checked against the length
    /// limit. The trie operation itself cannot fail.
    pub fn execute(&mut self, command: &Command) -> Result<Outcome, CommandError> {
        let word = match command.argument() {
            Some(argument) => self.prepare(argument)?,
            None => String::new(),
        };

        let outcome = match &mut self.store {
            Store::Chars(trie) => apply(trie, command, word.as_str(), word.clone(), |symbols| {
                symbols.iter().collect()
            }),
            Store::Bytes(trie) => apply(trie, command, word.as_bytes(), word.clone(), |symbols| {
                String::from_utf8_lossy(symbols).into_owned()
            }),
        };
        Ok(outcome)
    }

    /// Runs a whole script, writing one result per command to `writer`.
    ///
    /// Failing lines are reported and written as errors; the run goes on unless
    /// `stop_on_error` is set, in which case the first failure is returned.
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` - counts of executed and failed commands
    /// * `Err(LauError)` - an I/O or serialization failure, or the first command
    ///   error when `stop_on_error` is set
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> LauResult<RunSummary> {
        let span = info_span!("script", symbols = ?self.config.symbols);
        let _guard = span.enter();

        let mut summary = RunSummary::default();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            match self.execute_line(&line) {
                Ok(None) => {}
                Ok(Some(outcome)) => {
                    summary.executed += 1;
                    self.write_outcome(&mut writer, &outcome)?;
                }
                Err(error) => {
                    summary.failed += 1;
                    warn!(line = line_number, %error, "command failed");
                    self.write_error(&mut writer, line_number, &error)?;
                    self.reporter.report(
                        ErrorContext::new(error.clone().into(), "script")
                            .with_details(format!("line {line_number}: {}", line.trim()))
                            .with_span_trace(),
                    );
                    if self.config.stop_on_error {
                        writer.flush()?;
                        return Err(error.into());
                    }
                }
            }
        }

        writer.flush()?;
        info!(
            executed = summary.executed,
            failed = summary.failed,
            "script finished"
        );
        Ok(summary)
    }

    fn prepare(&self, argument: &str) -> Result<String, CommandError> {
        let word = if self.config.fold_case {
            argument.to_lowercase()
        } else {
            argument.to_string()
        };

        let length = match self.config.symbols {
            SymbolMode::Chars => word.chars().count(),
            SymbolMode::Bytes => word.len(),
        };
        if length > self.config.max_word_length {
            return Err(CommandError::WordTooLong {
                length,
                max_length: self.config.max_word_length,
            });
        }

        Ok(word)
    }

    fn write_outcome<W: Write>(&self, writer: &mut W, outcome: &Outcome) -> LauResult<()> {
        match self.config.output {
            OutputFormat::Text => writeln!(writer, "{outcome}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, outcome)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    fn write_error<W: Write>(
        &self,
        writer: &mut W,
        line: usize,
        error: &CommandError,
    ) -> LauResult<()> {
        let message = error.to_string();
        match self.config.output {
            OutputFormat::Text => writeln!(writer, "error line {line}: {message}")?,
            OutputFormat::Json => {
                let entry = ErrorLine {
                    op: "error",
                    line,
                    message: &message,
                };
                serde_json::to_writer(&mut *writer, &entry)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

/// Applies `command` to `trie`, using `symbols` as the word on the trie side
/// and `word` as its printable form.
fn apply<S, W>(
    trie: &mut LauTrie<S>,
    command: &Command,
    symbols: &W,
    word: String,
    render: impl Fn(&[S]) -> String,
) -> Outcome
where
    S: Symbol + Ord,
    W: Word<Symbol = S> + ?Sized,
{
    match command {
        Command::Insert(_) => {
            trie.insert(symbols);
            Outcome::Inserted {
                count: trie.search(symbols),
                word,
            }
        }
        Command::Search(_) => Outcome::Found {
            count: trie.search(symbols),
            word,
        },
        Command::Remove(_) => {
            let removed = usize::from(trie.remove(symbols));
            Outcome::Removed {
                removed,
                count: trie.search(symbols),
                word,
            }
        }
        Command::Purge(_) => {
            let removed = trie.remove_all(symbols);
            Outcome::Removed {
                removed,
                count: trie.search(symbols),
                word,
            }
        }
        Command::Prefix(_) => Outcome::PrefixCount {
            count: trie.count_prefix(symbols),
            prefix: word,
        },
        Command::List(_) => Outcome::Listed {
            words: trie
                .words_with_prefix(symbols)
                .into_iter()
                .map(|(path, count)| WordCount {
                    word: render(&path),
                    count,
                })
                .collect(),
            prefix: word,
        },
        Command::Stats => Outcome::Stats(trie.stats()),
        Command::Clear => {
            let dropped = trie.len();
            trie.clear();
            Outcome::Cleared { dropped }
        }
    }
}
