//! General usage screen, shown when the command line is too short

use nl_core::{Command, Features, Flag};

/// Printed after every rejected command line
pub const USAGE_REMINDER: &str = "(invoke without arguments to see usage information)";

fn command_summary(command: Command) -> &'static str {
    match command {
        Command::Add => "add files, create arc if needed",
        Command::Delete => "delete files from archive",
        Command::Extract => "extract files",
        Command::ExtractToPipe => "extract files to pipe, no msgs",
        Command::ListShort => "list files (short)",
        Command::ListVerbose => "list files (verbose)",
        Command::ListDebug => "list files (debug)",
        Command::Test => "test archive integrity",
        Command::Help => "extended help message",
    }
}

/// Usage text, two columns per line
pub fn usage_text(program: &str, features: &Features) -> String {
    let mut text = String::new();
    text.push_str(&format!(
        "\n{program} v{}\n",
        env!("CARGO_PKG_VERSION")
    ));
    text.push_str(&format!(
        "Usage: {program} -command[modifiers] archive [filename-list]\n\n"
    ));

    let commands = [
        Command::Add,
        Command::Extract,
        Command::ListShort,
        Command::ListVerbose,
        Command::ExtractToPipe,
        Command::Test,
        Command::Delete,
        Command::Help,
    ];
    for pair in commands.chunks(2) {
        let cells: Vec<String> = pair
            .iter()
            .map(|c| format!("-{}  {}", c.letter(), command_summary(*c)))
            .collect();
        text.push_str(&two_columns(&cells));
    }

    text.push_str("\n modifiers:\n");
    let modifiers = [
        Flag::Update,
        Flag::Freshen,
        Flag::Recurse,
        Flag::JunkPaths,
        Flag::NoCompression,
        Flag::Comments,
        Flag::CompressDeflate,
        Flag::CompressBzip2,
        Flag::ConvertText,
        Flag::ConvertAll,
        Flag::OverwriteExisting,
        Flag::AddAsDisk,
        Flag::PreserveType,
        Flag::PreserveTypeExtended,
        Flag::BinaryII,
    ];
    for pair in modifiers.chunks(2) {
        let cells: Vec<String> = pair
            .iter()
            .map(|f| format!("{:<3} {}", f.to_string(), modifier_summary(*f, features)))
            .collect();
        text.push_str(&two_columns(&cells));
    }

    text
}

fn modifier_summary(flag: Flag, features: &Features) -> String {
    match flag {
        Flag::CompressDeflate if !features.deflate => "use zlib [not included]".to_string(),
        Flag::CompressBzip2 if !features.bzip2 => "use BWT [not included]".to_string(),
        other => other.description().to_string(),
    }
}

fn two_columns(cells: &[String]) -> String {
    match cells {
        [left, right] => format!("  {left:<38}{right}\n"),
        [only] => format!("  {only}\n"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_command() {
        let text = usage_text("nulib2", &Features::all());
        assert!(text.contains("Usage: nulib2 -command[modifiers] archive [filename-list]"));
        for command in Command::ALL {
            if command == Command::ListDebug {
                // Undocumented in the short screen
                continue;
            }
            assert!(
                text.contains(&format!("-{}  ", command.letter())),
                "missing -{}",
                command.letter()
            );
        }
    }

    #[test]
    fn test_usage_marks_missing_compression() {
        let text = usage_text("nulib2", &Features::none());
        assert!(text.contains("use zlib [not included]"));
        assert!(text.contains("use BWT [not included]"));

        let text = usage_text("nulib2", &Features::all());
        assert!(text.contains("use gzip 'deflate' compression"));
        assert!(!text.contains("[not included]"));
    }
}
