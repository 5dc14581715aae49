//! The seam to the archive-format library
//!
//! Adding, extracting, listing, deleting and testing are performed by an
//! implementation of [`ArchiveOps`]. This crate only decides which one runs
//! and with what options.

use serde::Serialize;

use crate::error::Result;
use crate::state::ParseState;

/// Optional compression support reported by the archive library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Features {
    /// Huffman SQueeze
    pub squeeze: bool,
    /// LZW/1 and LZW/2
    pub lzw: bool,
    /// 12- and 16-bit LZC
    pub lzc: bool,
    pub deflate: bool,
    pub bzip2: bool,
}

impl Features {
    /// Everything available
    pub fn all() -> Self {
        Self {
            squeeze: true,
            lzw: true,
            lzc: true,
            deflate: true,
            bzip2: true,
        }
    }

    /// Nothing available
    pub fn none() -> Self {
        Self::default()
    }

    /// Name/availability pairs in display order
    pub fn summary(&self) -> [(&'static str, bool); 5] {
        [
            ("Huffman SQueeze", self.squeeze),
            ("LZW/1 and LZW/2", self.lzw),
            ("12- and 16-bit LZC", self.lzc),
            ("Deflate", self.deflate),
            ("bzip2", self.bzip2),
        ]
    }
}

/// Archive operations, one per command
///
/// Each handler receives the validated [`ParseState`] and reports only
/// whether it succeeded.
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveOps {
    /// Compression support, consulted while parsing `-z` and `-zz`
    fn features(&self) -> Features;

    fn add(&self, state: &ParseState) -> Result<()>;

    fn delete(&self, state: &ParseState) -> Result<()>;

    fn extract(&self, state: &ParseState) -> Result<()>;

    fn extract_to_pipe(&self, state: &ParseState) -> Result<()>;

    fn list_short(&self, state: &ParseState) -> Result<()>;

    fn list_verbose(&self, state: &ParseState) -> Result<()>;

    fn list_debug(&self, state: &ParseState) -> Result<()>;

    fn test(&self, state: &ParseState) -> Result<()>;

    /// Show extended help. Takes no state: a lone `-h` has no archive.
    fn help(&self) -> Result<()>;
}
