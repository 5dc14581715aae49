//! The validated result of parsing a command line

use serde::Serialize;

use crate::command::Command;
use crate::modifier::{Flag, Modifiers};

/// The single-character archive name meaning stdin or stdout
pub const STDIO_SENTINEL: &str = "-";

/// Where the archive is read from or written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum ArchivePath {
    /// `-`: stdin for reading commands, stdout for writing ones
    Pipe,
    File(String),
}

impl ArchivePath {
    /// Record an archive token verbatim, recognising the sentinel
    pub fn from_token(token: &str) -> Self {
        if token == STDIO_SENTINEL {
            ArchivePath::Pipe
        } else {
            ArchivePath::File(token.to_string())
        }
    }

    pub fn is_pipe(&self) -> bool {
        matches!(self, ArchivePath::Pipe)
    }

    /// The token as the user typed it
    pub fn as_str(&self) -> &str {
        match self {
            ArchivePath::Pipe => STDIO_SENTINEL,
            ArchivePath::File(path) => path,
        }
    }
}

impl std::fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested compression the archive library cannot provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnavailableFeature {
    /// The flag that was left unset
    pub flag: Flag,
}

impl std::fmt::Display for UnavailableFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.flag {
            Flag::CompressBzip2 => write!(f, "libbz2 support not compiled in, -zz ignored"),
            Flag::CompressDeflate => write!(f, "zlib support not compiled in, -z ignored"),
            other => write!(f, "{other} is not available"),
        }
    }
}

/// Fully validated invocation: command, modifiers, archive and filespecs
///
/// Only the parser builds one. Once returned it is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseState {
    command: Command,
    modifiers: Modifiers,
    archive: ArchivePath,
    filespecs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<UnavailableFeature>,
}

impl ParseState {
    pub fn command(&self) -> Command {
        self.command
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn archive(&self) -> &ArchivePath {
        &self.archive
    }

    /// File specifications in the order given; may be empty
    pub fn filespecs(&self) -> &[String] {
        &self.filespecs
    }

    /// Non-fatal problems found while parsing
    pub fn warnings(&self) -> &[UnavailableFeature] {
        &self.warnings
    }
}

impl std::fmt::Display for ParseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Command:   {} (-{})", self.command, self.command.letter())?;
        writeln!(f, "Modifiers: {}", self.modifiers)?;
        writeln!(f, "Archive:   {}", self.archive)?;
        if self.filespecs.is_empty() {
            write!(f, "Files:     (all)")
        } else {
            write!(f, "Files:     {}", self.filespecs.join(" "))
        }
    }
}

/// Accumulates a [`ParseState`] while the command line is scanned
#[derive(Debug)]
pub(crate) struct ParseStateBuilder {
    command: Command,
    modifiers: Modifiers,
    warnings: Vec<UnavailableFeature>,
}

impl ParseStateBuilder {
    pub(crate) fn new(command: Command) -> Self {
        Self {
            command,
            modifiers: Modifiers::default(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn command(&self) -> Command {
        self.command
    }

    pub(crate) fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub(crate) fn set(&mut self, flag: Flag) {
        self.modifiers.set(flag);
    }

    pub(crate) fn warn_unavailable(&mut self, flag: Flag) {
        self.warnings.push(UnavailableFeature { flag });
    }

    pub(crate) fn finish(self, archive: ArchivePath, filespecs: Vec<String>) -> ParseState {
        ParseState {
            command: self.command,
            modifiers: self.modifiers,
            archive,
            filespecs,
            warnings: self.warnings,
        }
    }
}

/// What a successful parse asks the dispatcher to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "invocation", rename_all = "kebab-case")]
pub enum Invocation {
    /// A lone `h`/`-h`: show extended help, no archive involved
    ExtendedHelp,
    Run(ParseState),
}

impl Invocation {
    pub fn command(&self) -> Command {
        match self {
            Invocation::ExtendedHelp => Command::Help,
            Invocation::Run(state) => state.command(),
        }
    }

    pub fn state(&self) -> Option<&ParseState> {
        match self {
            Invocation::ExtendedHelp => None,
            Invocation::Run(state) => Some(state),
        }
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Invocation::ExtendedHelp => write!(f, "Command:   help (-h), no archive"),
            Invocation::Run(state) => write!(f, "{state}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_path_sentinel() {
        assert_eq!(ArchivePath::from_token("-"), ArchivePath::Pipe);
        assert!(ArchivePath::from_token("-").is_pipe());
        assert_eq!(
            ArchivePath::from_token("--"),
            ArchivePath::File("--".to_string())
        );
        assert_eq!(ArchivePath::from_token("a.shk").as_str(), "a.shk");
        assert_eq!(ArchivePath::Pipe.to_string(), "-");
    }

    #[test]
    fn test_builder_finish() {
        let mut builder = ParseStateBuilder::new(Command::Extract);
        builder.set(Flag::Recurse);
        builder.warn_unavailable(Flag::CompressDeflate);
        let state = builder.finish(
            ArchivePath::from_token("disk.shk"),
            vec!["a".to_string(), "b".to_string()],
        );

        assert_eq!(state.command(), Command::Extract);
        assert!(state.modifiers().recurse);
        assert_eq!(state.archive().as_str(), "disk.shk");
        assert_eq!(state.filespecs(), ["a", "b"]);
        assert_eq!(state.warnings().len(), 1);
    }

    #[test]
    fn test_display() {
        let state = ParseStateBuilder::new(Command::ListShort)
            .finish(ArchivePath::Pipe, Vec::new());
        let text = state.to_string();
        assert!(text.contains("list-short (-t)"));
        assert!(text.contains("Archive:   -"));
        assert!(text.contains("(all)"));
    }

    #[test]
    fn test_serialize_invocation() {
        let state = ParseStateBuilder::new(Command::Add)
            .finish(ArchivePath::from_token("a.shk"), vec!["f1".to_string()]);
        let json = serde_json::to_value(Invocation::Run(state)).unwrap();
        assert_eq!(json["invocation"], "run");
        assert_eq!(json["command"], "add");
        assert_eq!(json["archive"]["kind"], "file");
        assert_eq!(json["archive"]["path"], "a.shk");
        assert_eq!(json["filespecs"][0], "f1");
        assert!(json.get("warnings").is_none());

        let json = serde_json::to_value(Invocation::ExtendedHelp).unwrap();
        assert_eq!(json["invocation"], "extended-help");
    }
}
