//! Command-line scanner and modifier interpreter
//!
//! The grammar is `-command[modifiers] [-modifiers ...] archive [filespec ...]`:
//!
//! - The first token selects the command by its first letter (after an
//!   optional hyphen). Any letters after it form a modifier bundle.
//! - Following tokens that start with a hyphen are further bundles, except
//!   `-` itself, which names stdin/stdout as the archive.
//! - The first other token is the archive; everything after it is a
//!   filespec.
//!
//! Every modifier is checked against the [`CapabilityTable`] as soon as it
//! is applied, so an illegal letter is reported before the archive or any
//! filespec is looked at.

use crate::capability::CapabilityTable;
use crate::command::Command;
use crate::error::{ParseError, Result};
use crate::lexer::{BundleLexer, ModifierToken};
use crate::modifier::Flag;
use crate::state::{ArchivePath, Invocation, ParseStateBuilder, STDIO_SENTINEL};
use crate::traits::Features;

/// Parses argument lists against a capability table
#[derive(Debug, Clone, Copy)]
pub struct Parser<'t> {
    table: &'t CapabilityTable,
    features: Features,
}

impl<'t> Parser<'t> {
    /// `features` decides whether `-z` and `-zz` can take effect
    pub fn new(table: &'t CapabilityTable, features: Features) -> Self {
        Self { table, features }
    }

    /// Parse the arguments that follow the program name.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Invocation> {
        let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        // A lone help command needs no archive
        if let [only] = tokens.as_slice()
            && is_help_token(only)
        {
            tracing::debug!("Lone help command, skipping archive checks");
            return Ok(Invocation::ExtendedHelp);
        }

        let [first, rest @ ..] = tokens.as_slice() else {
            return Err(ParseError::Usage.into());
        };
        if rest.is_empty() {
            return Err(ParseError::Usage.into());
        }

        let body = first.strip_prefix('-').unwrap_or(*first);
        let mut chars = body.chars();
        let letter = chars.next().ok_or(ParseError::MissingCommand)?;
        let command = Command::from_letter(letter).ok_or(ParseError::UnknownCommand(letter))?;

        // A command without a row is a table defect; surface it before any
        // modifier is blamed for it.
        self.table.lookup(command)?;

        let mut builder = ParseStateBuilder::new(command);
        self.apply_bundle(&mut builder, chars.as_str())?;

        let mut remaining = rest.iter();
        let archive = loop {
            match remaining.next() {
                None => return Err(ParseError::MissingArchive.into()),
                Some(token) if *token != STDIO_SENTINEL && token.starts_with('-') => {
                    self.apply_bundle(&mut builder, &token[1..])?;
                }
                Some(token) => break *token,
            }
        };

        let modifiers = builder.modifiers();
        if modifiers.no_compression && modifiers.compress_deflate {
            return Err(ParseError::ConflictingModifiers {
                first: Flag::NoCompression.letter(),
                second: Flag::CompressDeflate.letter(),
            }
            .into());
        }

        let archive = ArchivePath::from_token(archive);
        if archive.is_pipe() && !self.table.is_pipe_allowed(command) {
            return Err(ParseError::PipeNotAllowed(command).into());
        }

        let filespecs: Vec<String> = remaining.map(|s| s.to_string()).collect();
        if filespecs.is_empty() && self.table.is_filespec_required(command) {
            return Err(ParseError::MissingFilespec(command).into());
        }

        let state = builder.finish(archive, filespecs);
        tracing::debug!(
            command = %state.command(),
            modifiers = %state.modifiers(),
            archive = %state.archive(),
            filespecs = state.filespecs().len(),
            "Parsed command line"
        );
        Ok(Invocation::Run(state))
    }

    fn apply_bundle(&self, builder: &mut ParseStateBuilder, bundle: &str) -> Result<()> {
        for token in BundleLexer::new(bundle) {
            self.apply_token(builder, token)?;
        }
        Ok(())
    }

    fn apply_token(&self, builder: &mut ParseStateBuilder, token: ModifierToken) -> Result<()> {
        let flag = Flag::from_letter(token.letter, token.doubled)
            .ok_or(ParseError::UnknownModifier(token.typed))?;

        match flag {
            Flag::CompressDeflate if !self.features.deflate => {
                tracing::debug!("zlib support not compiled in, ignoring -z");
                builder.warn_unavailable(flag);
            }
            Flag::CompressBzip2 if !self.features.bzip2 => {
                tracing::debug!("libbz2 support not compiled in, ignoring -zz");
                builder.warn_unavailable(flag);
            }
            _ => builder.set(flag),
        }

        if !self.table.is_modifier_legal(builder.command(), token.letter) {
            return Err(ParseError::IllegalModifier {
                modifier: token.letter,
                command: builder.command(),
            }
            .into());
        }

        Ok(())
    }
}

/// Exactly `h`, `-h`, `H` or `-H`
fn is_help_token(token: &str) -> bool {
    let body = token.strip_prefix('-').unwrap_or(token);
    let mut chars = body.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if Command::from_letter(c) == Some(Command::Help)
    )
}
