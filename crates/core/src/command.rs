//! Command selection
//!
//! Exactly one command is chosen per invocation, from the first letter of
//! the first token.

use serde::{Deserialize, Serialize};

/// The operation an invocation asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    Add,
    Delete,
    Extract,
    ExtractToPipe,
    ListShort,
    ListVerbose,
    ListDebug,
    Test,
    Help,
}

impl Command {
    /// Every command, in capability-table order
    pub const ALL: [Command; 9] = [
        Command::Add,
        Command::Delete,
        Command::Extract,
        Command::ExtractToPipe,
        Command::ListShort,
        Command::ListVerbose,
        Command::ListDebug,
        Command::Test,
        Command::Help,
    ];

    /// Select a command by its letter, ignoring case
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Command::Add),
            'x' => Some(Command::Extract),
            'p' => Some(Command::ExtractToPipe),
            't' => Some(Command::ListShort),
            'v' => Some(Command::ListVerbose),
            'g' => Some(Command::ListDebug),
            'i' => Some(Command::Test),
            'd' => Some(Command::Delete),
            'h' => Some(Command::Help),
            _ => None,
        }
    }

    /// The lowercase letter that selects this command
    pub fn letter(self) -> char {
        match self {
            Command::Add => 'a',
            Command::Delete => 'd',
            Command::Extract => 'x',
            Command::ExtractToPipe => 'p',
            Command::ListShort => 't',
            Command::ListVerbose => 'v',
            Command::ListDebug => 'g',
            Command::Test => 'i',
            Command::Help => 'h',
        }
    }

    /// Stable lowercase name, also used in JSON output
    pub fn name(self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Delete => "delete",
            Command::Extract => "extract",
            Command::ExtractToPipe => "extract-to-pipe",
            Command::ListShort => "list-short",
            Command::ListVerbose => "list-verbose",
            Command::ListDebug => "list-debug",
            Command::Test => "test",
            Command::Help => "help",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
