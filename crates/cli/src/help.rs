//! Extended help (`-h`)
//!
//! Valid modifiers are read from the capability table, so this screen
//! cannot drift from what the parser accepts.

use comfy_table::{ContentArrangement, Table, presets};
use nl_core::{CapabilityTable, Command, Features, Flag, Result};
use serde::Serialize;

use crate::output::Formatter;

const LICENSE_BLURB: &str = "\
NuLib2 is free software, distributed under terms of the GNU General
Public License.  Archive access is provided by a separate library.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.";

/// Commands in the order the help screen shows them
const HELP_ORDER: [Command; 8] = [
    Command::ListVerbose,
    Command::ListShort,
    Command::Add,
    Command::Delete,
    Command::Extract,
    Command::ExtractToPipe,
    Command::Test,
    Command::Help,
];

fn describe(command: Command) -> &'static str {
    match command {
        Command::ListVerbose => "verbose listing of archive contents",
        Command::ListShort => "quick dump of table of contents",
        Command::ListDebug => "debug dump of archive structure",
        Command::Add => "add files, creating the archive if necessary",
        Command::Delete => "delete files from archive",
        Command::Extract => "extract files from an archive",
        Command::ExtractToPipe => "extract files to pipe",
        Command::Test => "test archive integrity",
        Command::Help => "show extended help",
    }
}

/// One command's help row
#[derive(Debug, Serialize)]
pub struct CommandHelp {
    pub letter: String,
    pub command: Command,
    pub description: &'static str,
    pub modifiers: Vec<String>,
    pub pipe_allowed: bool,
    pub filespec_required: bool,
}

/// The whole extended help screen
#[derive(Debug, Serialize)]
pub struct ExtendedHelp {
    pub commands: Vec<CommandHelp>,
    pub features: Features,
}

impl ExtendedHelp {
    /// Build from the table. A command missing from the table is skipped
    /// and reported as an internal error.
    pub fn build(table: &CapabilityTable, features: Features) -> Self {
        let mut commands = Vec::with_capacity(HELP_ORDER.len());
        for command in HELP_ORDER {
            let entry = match table.lookup(command) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::error!(%command, error = %e, "Skipping command in help");
                    continue;
                }
            };

            // Listed last-to-first, doubled spellings next to the single one
            let modifiers = entry
                .legal_modifiers
                .chars()
                .rev()
                .flat_map(|letter| {
                    let single = Flag::from_letter(letter, false).map(|f| f.to_string());
                    let doubled = Flag::from_letter(letter, true).map(|f| f.to_string());
                    single.into_iter().chain(doubled)
                })
                .collect();

            commands.push(CommandHelp {
                letter: format!("-{}", command.letter()),
                command,
                description: describe(command),
                modifiers,
                pipe_allowed: entry.pipe_allowed,
                filespec_required: entry.filespec_required,
            });
        }

        Self { commands, features }
    }

    /// Human-readable screen
    pub fn render(&self, formatter: &Formatter) -> String {
        let mut text = String::new();
        text.push_str(LICENSE_BLURB);
        text.push_str("\n\n");

        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Command", "Description", "Valid modifiers"]);
        for row in &self.commands {
            let modifiers = if row.modifiers.is_empty() {
                "(none)".to_string()
            } else {
                row.modifiers.join(" ")
            };
            table.add_row(vec![row.letter.clone(), row.description.to_string(), modifiers]);
        }
        text.push_str(&table.to_string());
        text.push_str("\n\n");

        text.push_str(&formatter.style_heading(
            "Compression algorithms supported by the archive library:",
        ));
        text.push('\n');
        for (name, available) in self.features.summary() {
            let dots = ".".repeat(20usize.saturating_sub(name.len()));
            text.push_str(&format!(
                "  {name} {dots} {}\n",
                formatter.style_available(available)
            ));
        }
        text
    }
}

/// Print the extended help screen
pub fn show(table: &CapabilityTable, features: Features, formatter: &Formatter) -> Result<()> {
    let help = ExtendedHelp::build(table, features);
    if formatter.is_json() {
        formatter.json(&help);
    } else {
        formatter.println(help.render(formatter).trim_end());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputConfig;
    use nl_core::CapabilityEntry;

    #[test]
    fn test_modifiers_follow_the_table() {
        let help = ExtendedHelp::build(&CapabilityTable::standard(), Features::all());
        assert_eq!(help.commands.len(), HELP_ORDER.len());

        let add = help
            .commands
            .iter()
            .find(|c| c.command == Command::Add)
            .unwrap();
        assert_eq!(
            add.modifiers,
            vec!["-u", "-f", "-r", "-j", "-0", "-z", "-zz", "-c", "-k", "-e", "-ee"]
        );
        assert!(add.filespec_required);
        assert!(!add.pipe_allowed);

        let help_row = help.commands.last().unwrap();
        assert_eq!(help_row.command, Command::Help);
        assert!(help_row.modifiers.is_empty());
    }

    #[test]
    fn test_missing_row_is_skipped() {
        let table =
            CapabilityTable::from_entries([CapabilityEntry::new(Command::Add, false, true, "r")]);
        let help = ExtendedHelp::build(&table, Features::none());
        assert_eq!(help.commands.len(), 1);
        assert_eq!(help.commands[0].letter, "-a");
    }

    #[test]
    fn test_render_lists_features() {
        let formatter = Formatter::new(
            OutputConfig {
                no_color: true,
                ..Default::default()
            },
            "nulib2",
        );
        let text = ExtendedHelp::build(&CapabilityTable::standard(), Features::none())
            .render(&formatter);
        assert!(text.contains("Valid modifiers"));
        assert!(text.contains("-x"));
        assert!(text.contains("Deflate"));
        assert!(text.contains("(none)"));
        assert!(text.contains("bzip2 ............... no"));
    }
}
