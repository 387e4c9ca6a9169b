//! Command error module.
//!
//! This module defines the errors raised while turning a script line into a
//! command and checking its word against the session settings.

use thiserror::Error;

/// Errors that can occur while parsing or preparing a script command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line names no known command.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// The command requires a word and none was given.
    #[error("Command '{0}' requires a word argument")]
    MissingArgument(String),

    /// The command takes no argument but one was given.
    #[error("Command '{command}' takes no argument, got '{argument}'")]
    UnexpectedArgument {
        /// The command keyword.
        command: String,
        /// The rejected argument.
        argument: String,
    },

    /// The word is longer than the session allows.
    #[error("Word of {length} symbols exceeds maximum length of {max_length}")]
    WordTooLong {
        /// Length of the rejected word, in symbols.
        length: usize,
        /// The configured maximum.
        max_length: usize,
    },
}
