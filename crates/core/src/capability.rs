//! Which modifiers are valid with which commands
//!
//! The table is built once by the caller and passed by reference to the
//! parser, the dispatcher and the help screen. It is never mutated.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::command::Command;
use crate::error::{Error, Result};

/// One row of the capability table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityEntry {
    pub command: Command,
    /// The archive may be the stdin/stdout sentinel `-`
    pub pipe_allowed: bool,
    /// At least one file specification must follow the archive
    pub filespec_required: bool,
    /// Legal modifier letters, in table order
    pub legal_modifiers: &'static str,
}

impl CapabilityEntry {
    pub const fn new(
        command: Command,
        pipe_allowed: bool,
        filespec_required: bool,
        legal_modifiers: &'static str,
    ) -> Self {
        Self {
            command,
            pipe_allowed,
            filespec_required,
            legal_modifiers,
        }
    }

    /// Whether `letter` is legal here. Case-insensitive.
    pub fn allows(&self, letter: char) -> bool {
        self.legal_modifiers.contains(letter.to_ascii_lowercase())
    }
}

const STANDARD_ROWS: [CapabilityEntry; 9] = [
    CapabilityEntry::new(Command::Add, false, true, "ekcz0jrfu"),
    CapabilityEntry::new(Command::Delete, false, true, "r"),
    CapabilityEntry::new(Command::Extract, true, false, "beslcjrfu"),
    CapabilityEntry::new(Command::ExtractToPipe, true, false, "blr"),
    CapabilityEntry::new(Command::ListShort, true, false, "br"),
    CapabilityEntry::new(Command::ListVerbose, true, false, "br"),
    CapabilityEntry::new(Command::ListDebug, true, false, "b"),
    CapabilityEntry::new(Command::Test, true, false, "br"),
    CapabilityEntry::new(Command::Help, false, false, ""),
];

/// Immutable command -> capability mapping
#[derive(Debug, Clone)]
pub struct CapabilityTable {
    entries: BTreeMap<Command, CapabilityEntry>,
}

impl CapabilityTable {
    /// The table every real invocation uses
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_ROWS)
    }

    /// Build a table from arbitrary rows. A later row for the same command
    /// replaces an earlier one.
    pub fn from_entries(rows: impl IntoIterator<Item = CapabilityEntry>) -> Self {
        let entries = rows.into_iter().map(|e| (e.command, e)).collect();
        Self { entries }
    }

    /// Find the row for `command`.
    ///
    /// A miss means the table is out of sync with [`Command`], which is a
    /// defect, so it is reported as [`Error::MissingCapability`].
    pub fn lookup(&self, command: Command) -> Result<&CapabilityEntry> {
        self.entries
            .get(&command)
            .ok_or(Error::MissingCapability(command))
    }

    /// False when the letter is not legal, or when the command has no row.
    pub fn is_modifier_legal(&self, command: Command, letter: char) -> bool {
        self.entries
            .get(&command)
            .is_some_and(|entry| entry.allows(letter))
    }

    /// False when pipes are not allowed, or when the command has no row.
    pub fn is_pipe_allowed(&self, command: Command) -> bool {
        self.entries
            .get(&command)
            .is_some_and(|entry| entry.pipe_allowed)
    }

    /// False when no filespec is needed. A missing row also answers false,
    /// but logs a diagnostic.
    pub fn is_filespec_required(&self, command: Command) -> bool {
        match self.entries.get(&command) {
            Some(entry) => entry.filespec_required,
            None => {
                tracing::warn!(%command, "Command not found in capability table");
                false
            }
        }
    }

    /// Rows in command order
    pub fn iter(&self) -> impl Iterator<Item = &CapabilityEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CapabilityTable {
    fn default() -> Self {
        Self::standard()
    }
}
