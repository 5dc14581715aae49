//! nl-core: Command grammar and dispatch for the nulib2 archive tool
//!
//! This crate turns an argument list into a validated [`Invocation`]:
//! - The capability table deciding which modifiers each command accepts
//! - The argument scanner and modifier interpreter
//! - The [`ArchiveOps`] trait implemented by the archive-format library
//! - The dispatcher that runs exactly one operation
//!
//! Nothing here touches an archive; parsing has no side effects.

pub mod capability;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod lexer;
pub mod modifier;
pub mod parser;
pub mod state;
pub mod traits;

pub use capability::{CapabilityEntry, CapabilityTable};
pub use command::Command;
pub use config::{Config, ConfigManager, LogSettings, OutputSettings};
pub use dispatch::dispatch;
pub use error::{Error, ParseError, Result};
pub use modifier::{Flag, MODIFIER_ALPHABET, Modifiers};
pub use parser::Parser;
pub use state::{ArchivePath, Invocation, ParseState, STDIO_SENTINEL, UnavailableFeature};
pub use traits::{ArchiveOps, Features};
