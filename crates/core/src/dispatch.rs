//! Route a validated invocation to exactly one archive operation

use crate::capability::CapabilityTable;
use crate::command::Command;
use crate::error::Result;
use crate::state::Invocation;
use crate::traits::ArchiveOps;

/// Run the handler for `invocation`.
///
/// The command is looked up in `table` first, so a command the table does
/// not know fails with [`crate::Error::MissingCapability`] instead of being
/// mistaken for an operation failure. Otherwise the handler's result is
/// returned unchanged.
pub fn dispatch(
    invocation: &Invocation,
    table: &CapabilityTable,
    ops: &dyn ArchiveOps,
) -> Result<()> {
    let command = invocation.command();
    table.lookup(command)?;

    let state = match invocation {
        Invocation::ExtendedHelp => {
            tracing::debug!("Dispatching extended help");
            return ops.help();
        }
        Invocation::Run(state) => state,
    };

    tracing::debug!(%command, archive = %state.archive(), "Dispatching");
    match command {
        Command::Add => ops.add(state),
        Command::Delete => ops.delete(state),
        Command::Extract => ops.extract(state),
        Command::ExtractToPipe => ops.extract_to_pipe(state),
        Command::ListShort => ops.list_short(state),
        Command::ListVerbose => ops.list_verbose(state),
        Command::ListDebug => ops.list_debug(state),
        Command::Test => ops.test(state),
        Command::Help => ops.help(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityEntry;
    use crate::error::Error;
    use crate::parser::Parser;
    use crate::traits::{Features, MockArchiveOps};

    fn invocation(args: &[&str]) -> Invocation {
        let table = CapabilityTable::standard();
        Parser::new(&table, Features::all())
            .parse(args)
            .expect("parse failed")
    }

    #[test]
    fn test_each_command_reaches_one_handler() {
        let table = CapabilityTable::standard();

        let mut ops = MockArchiveOps::new();
        ops.expect_add()
            .withf(|s| s.command() == Command::Add && s.filespecs() == ["f1"])
            .times(1)
            .returning(|_| Ok(()));
        ops.expect_delete().times(1).returning(|_| Ok(()));
        ops.expect_extract().times(1).returning(|_| Ok(()));
        ops.expect_extract_to_pipe().times(1).returning(|_| Ok(()));
        ops.expect_list_short().times(1).returning(|_| Ok(()));
        ops.expect_list_verbose().times(1).returning(|_| Ok(()));
        ops.expect_list_debug().times(1).returning(|_| Ok(()));
        ops.expect_test().times(1).returning(|_| Ok(()));
        ops.expect_help().times(1).returning(|| Ok(()));

        for args in [
            ["-a", "a.shk", "f1"],
            ["-d", "a.shk", "f1"],
            ["-x", "a.shk", "f1"],
            ["-p", "-", "f1"],
            ["-t", "a.shk", "f1"],
            ["-v", "a.shk", "f1"],
            ["-g", "a.shk", "f1"],
            ["-i", "a.shk", "f1"],
            ["-h", "a.shk", "f1"],
        ] {
            dispatch(&invocation(&args), &table, &ops).unwrap();
        }
    }

    #[test]
    fn test_extended_help() {
        let table = CapabilityTable::standard();
        let mut ops = MockArchiveOps::new();
        ops.expect_help().times(1).returning(|| Ok(()));

        dispatch(&invocation(&["-h"]), &table, &ops).unwrap();
    }

    #[test]
    fn test_operation_failure_is_passed_through() {
        let table = CapabilityTable::standard();
        let mut ops = MockArchiveOps::new();
        ops.expect_test().times(1).returning(|state| {
            Err(Error::Operation {
                command: state.command(),
                message: "bad CRC".to_string(),
            })
        });

        let err = dispatch(&invocation(&["-i", "a.shk"]), &table, &ops).unwrap_err();
        assert!(matches!(err, Error::Operation { command: Command::Test, .. }));
        assert!(!err.is_internal());
    }

    #[test]
    fn test_unknown_command_is_internal_error() {
        let partial = CapabilityTable::from_entries([CapabilityEntry::new(
            Command::Add,
            false,
            true,
            "",
        )]);
        // No handler may run
        let ops = MockArchiveOps::new();

        let err = dispatch(&invocation(&["-t", "a.shk"]), &partial, &ops).unwrap_err();
        assert!(matches!(err, Error::MissingCapability(Command::ListShort)));
        assert!(err.is_internal());
    }
}
