//! Error types for nl-core
//!
//! User mistakes on the command line are [`ParseError`]s. Everything else,
//! including the internal table defect, lives in [`Error`].

use thiserror::Error;

use crate::command::Command;

/// Result type alias for nl-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// A rejected command line
///
/// Parsing is effect-free: when one of these is returned nothing has been
/// opened, created or altered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Too few tokens to form an invocation
    #[error("missing command or archive name")]
    Usage,

    /// The command token was a bare hyphen
    #[error("You must specify a command after the '-'")]
    MissingCommand,

    /// Only modifier bundles followed the command
    #[error("No archive name was given")]
    MissingArchive,

    #[error("Unknown command '{0}'")]
    UnknownCommand(char),

    #[error("Unknown modifier '{0}'")]
    UnknownModifier(char),

    #[error("The '{modifier}' modifier doesn't make sense with the {command} command")]
    IllegalModifier { modifier: char, command: Command },

    #[error("Can't specify both -{first} and -{second}")]
    ConflictingModifiers { first: char, second: char },

    #[error("You can't do that with a pipe ({0} does not read or write a pipe)")]
    PipeNotAllowed(Command),

    #[error("This command requires a list of files ({0})")]
    MissingFilespec(Command),
}

impl ParseError {
    /// Whether the front end should answer with the general usage screen
    /// rather than a one-line diagnostic.
    pub fn shows_general_usage(&self) -> bool {
        matches!(self, ParseError::Usage)
    }
}

/// Error types for nl-core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The capability table has no row for a command. Always a bug in the
    /// table, never bad input.
    #[error("internal error: command '{0}' not found in the capability table")]
    MissingCapability(Command),

    /// The archive collaborator reported a failure
    #[error("{command} failed: {message}")]
    Operation { command: Command, message: String },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for defects in this crate rather than in the input or the
    /// archive.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::MissingCapability(_))
    }

    /// The parse error, if this is one
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages_name_the_letter() {
        assert_eq!(
            ParseError::UnknownCommand('q').to_string(),
            "Unknown command 'q'"
        );
        let err = ParseError::IllegalModifier {
            modifier: 's',
            command: Command::Add,
        };
        assert!(err.to_string().contains("'s'"));
        assert!(err.to_string().contains("add"));
    }

    #[test]
    fn test_only_bare_usage_shows_general_usage() {
        assert!(ParseError::Usage.shows_general_usage());
        assert!(!ParseError::MissingCommand.shows_general_usage());
        assert!(!ParseError::UnknownModifier('q').shows_general_usage());
    }

    #[test]
    fn test_internal_classification() {
        assert!(Error::MissingCapability(Command::Help).is_internal());
        assert!(!Error::from(ParseError::Usage).is_internal());
        assert!(
            !Error::Operation {
                command: Command::Add,
                message: "disk full".to_string()
            }
            .is_internal()
        );
    }

    #[test]
    fn test_as_parse() {
        let err = Error::from(ParseError::MissingFilespec(Command::Delete));
        assert_eq!(
            err.as_parse(),
            Some(&ParseError::MissingFilespec(Command::Delete))
        );
        assert!(Error::Config("bad".to_string()).as_parse().is_none());
    }
}
