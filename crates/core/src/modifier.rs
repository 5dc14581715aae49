//! Modifier letters and the flags they set
//!
//! Most letters set one flag. `e`, `l` and `z` mean something else when
//! typed twice in a row inside a bundle (`ee`, `ll`, `zz`).

use serde::{Deserialize, Serialize};

/// Every letter that names a modifier
pub const MODIFIER_ALPHABET: &str = "ufrj0skcbzel";

/// Letters whose doubled form selects a different flag
pub const DOUBLING_LETTERS: &str = "elz";

/// One modifier effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Update,
    Freshen,
    Recurse,
    JunkPaths,
    NoCompression,
    OverwriteExisting,
    AddAsDisk,
    Comments,
    BinaryII,
    CompressDeflate,
    CompressBzip2,
    PreserveType,
    PreserveTypeExtended,
    ConvertText,
    ConvertAll,
}

impl Flag {
    /// Map a lowercase letter (and whether it was doubled) to its flag.
    ///
    /// A doubled non-doubling letter has no meaning and yields `None`;
    /// the lexer never produces one.
    pub fn from_letter(letter: char, doubled: bool) -> Option<Self> {
        let flag = match (letter, doubled) {
            ('u', false) => Flag::Update,
            ('f', false) => Flag::Freshen,
            ('r', false) => Flag::Recurse,
            ('j', false) => Flag::JunkPaths,
            ('0', false) => Flag::NoCompression,
            ('s', false) => Flag::OverwriteExisting,
            ('k', false) => Flag::AddAsDisk,
            ('c', false) => Flag::Comments,
            ('b', false) => Flag::BinaryII,
            ('z', false) => Flag::CompressDeflate,
            ('z', true) => Flag::CompressBzip2,
            ('e', false) => Flag::PreserveType,
            ('e', true) => Flag::PreserveTypeExtended,
            ('l', false) => Flag::ConvertText,
            ('l', true) => Flag::ConvertAll,
            _ => return None,
        };
        Some(flag)
    }

    /// The letter checked against the capability table
    pub fn letter(self) -> char {
        match self {
            Flag::Update => 'u',
            Flag::Freshen => 'f',
            Flag::Recurse => 'r',
            Flag::JunkPaths => 'j',
            Flag::NoCompression => '0',
            Flag::OverwriteExisting => 's',
            Flag::AddAsDisk => 'k',
            Flag::Comments => 'c',
            Flag::BinaryII => 'b',
            Flag::CompressDeflate | Flag::CompressBzip2 => 'z',
            Flag::PreserveType | Flag::PreserveTypeExtended => 'e',
            Flag::ConvertText | Flag::ConvertAll => 'l',
        }
    }

    /// How the flag is typed on the command line, e.g. `zz`
    pub fn spelling(self) -> &'static str {
        match self {
            Flag::Update => "u",
            Flag::Freshen => "f",
            Flag::Recurse => "r",
            Flag::JunkPaths => "j",
            Flag::NoCompression => "0",
            Flag::OverwriteExisting => "s",
            Flag::AddAsDisk => "k",
            Flag::Comments => "c",
            Flag::BinaryII => "b",
            Flag::CompressDeflate => "z",
            Flag::CompressBzip2 => "zz",
            Flag::PreserveType => "e",
            Flag::PreserveTypeExtended => "ee",
            Flag::ConvertText => "l",
            Flag::ConvertAll => "ll",
        }
    }

    /// Short description used by usage and help screens
    pub fn description(self) -> &'static str {
        match self {
            Flag::Update => "update files (add + keep newest)",
            Flag::Freshen => "freshen (update, no add)",
            Flag::Recurse => "recurse into subdirs",
            Flag::JunkPaths => "junk (don't record) directory names",
            Flag::NoCompression => "don't use compression",
            Flag::OverwriteExisting => "stomp existing files w/o asking",
            Flag::AddAsDisk => "store files as disk images",
            Flag::Comments => "add one-line comments",
            Flag::BinaryII => "force Binary II mode",
            Flag::CompressDeflate => "use gzip 'deflate' compression",
            Flag::CompressBzip2 => "use bzip2 'BWT' compression",
            Flag::PreserveType => "preserve ProDOS file types",
            Flag::PreserveTypeExtended => "preserve types and extend names",
            Flag::ConvertText => "auto-convert text files",
            Flag::ConvertAll => "convert CR/LF on ALL files",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-{}", self.spelling())
    }
}

/// The accumulated modifier flags of one invocation
///
/// Flags are independent; the only forbidden pair (`-0` with `-z`) is
/// rejected when parsing finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub update: bool,
    pub freshen: bool,
    pub recurse: bool,
    pub junk_paths: bool,
    pub no_compression: bool,
    pub overwrite_existing: bool,
    pub add_as_disk: bool,
    pub comments: bool,
    pub binary_ii: bool,
    pub compress_deflate: bool,
    pub compress_bzip2: bool,
    pub preserve_type: bool,
    pub preserve_type_extended: bool,
    pub convert_text: bool,
    pub convert_all: bool,
}

impl Modifiers {
    /// Turn a flag on
    pub fn set(&mut self, flag: Flag) {
        *self.slot(flag) = true;
    }

    /// Whether a flag is on
    pub fn contains(&self, flag: Flag) -> bool {
        let mut copy = *self;
        *copy.slot(flag)
    }

    /// True when no flag is set
    pub fn is_empty(&self) -> bool {
        *self == Modifiers::default()
    }

    /// The flags that are on, in a fixed order
    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        const ORDER: [Flag; 15] = [
            Flag::Update,
            Flag::Freshen,
            Flag::Recurse,
            Flag::JunkPaths,
            Flag::NoCompression,
            Flag::OverwriteExisting,
            Flag::AddAsDisk,
            Flag::Comments,
            Flag::BinaryII,
            Flag::CompressDeflate,
            Flag::CompressBzip2,
            Flag::PreserveType,
            Flag::PreserveTypeExtended,
            Flag::ConvertText,
            Flag::ConvertAll,
        ];
        ORDER.into_iter().filter(|f| self.contains(*f))
    }

    fn slot(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::Update => &mut self.update,
            Flag::Freshen => &mut self.freshen,
            Flag::Recurse => &mut self.recurse,
            Flag::JunkPaths => &mut self.junk_paths,
            Flag::NoCompression => &mut self.no_compression,
            Flag::OverwriteExisting => &mut self.overwrite_existing,
            Flag::AddAsDisk => &mut self.add_as_disk,
            Flag::Comments => &mut self.comments,
            Flag::BinaryII => &mut self.binary_ii,
            Flag::CompressDeflate => &mut self.compress_deflate,
            Flag::CompressBzip2 => &mut self.compress_bzip2,
            Flag::PreserveType => &mut self.preserve_type,
            Flag::PreserveTypeExtended => &mut self.preserve_type_extended,
            Flag::ConvertText => &mut self.convert_text,
            Flag::ConvertAll => &mut self.convert_all,
        }
    }
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        let spelled: Vec<String> = self.iter().map(|flag| flag.to_string()).collect();
        write!(f, "{}", spelled.join(" "))
    }
}
