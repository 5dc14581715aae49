//! Archive operations available without an archive-format library
//!
//! Help is rendered here. Every operation that needs to open an archive
//! reports that no archive library is linked into this build.

use nl_core::{ArchiveOps, CapabilityTable, Error, Features, ParseState, Result};

use crate::output::Formatter;

/// [`ArchiveOps`] for a build with no archive engine
pub struct StandaloneOps<'a> {
    table: &'a CapabilityTable,
    formatter: &'a Formatter,
}

impl<'a> StandaloneOps<'a> {
    pub fn new(table: &'a CapabilityTable, formatter: &'a Formatter) -> Self {
        Self { table, formatter }
    }

    fn unavailable(&self, state: &ParseState) -> Result<()> {
        let command = state.command();
        tracing::info!(%command, archive = %state.archive(), "No archive engine linked");
        Err(Error::Unsupported(format!(
            "{command} on '{}' requires an archive library, and none is linked into this build",
            state.archive()
        )))
    }
}

impl ArchiveOps for StandaloneOps<'_> {
    fn features(&self) -> Features {
        Features::none()
    }

    fn add(&self, state: &ParseState) -> Result<()> {
        self.unavailable(state)
    }

    fn delete(&self, state: &ParseState) -> Result<()> {
        self.unavailable(state)
    }

    fn extract(&self, state: &ParseState) -> Result<()> {
        self.unavailable(state)
    }

    fn extract_to_pipe(&self, state: &ParseState) -> Result<()> {
        self.unavailable(state)
    }

    fn list_short(&self, state: &ParseState) -> Result<()> {
        self.unavailable(state)
    }

    fn list_verbose(&self, state: &ParseState) -> Result<()> {
        self.unavailable(state)
    }

    fn list_debug(&self, state: &ParseState) -> Result<()> {
        self.unavailable(state)
    }

    fn test(&self, state: &ParseState) -> Result<()> {
        self.unavailable(state)
    }

    fn help(&self) -> Result<()> {
        crate::help::show(self.table, self.features(), self.formatter)
    }
}
