//! Command-line parsing for the `valete` binary.
//!
//! The surface is deliberately small: `-h` for help, `-o <path>` for the
//! output location, and free arguments that must name `.vlt` source files.
//! Arguments are scanned in one pass; input paths keep their command-line
//! order, which downstream stages treat as meaningful.
//!
//! Misuse is an expected runtime event, so parsing returns [`CliError`]
//! values rather than panicking; the binary turns them into messages and a
//! non-zero exit.

use thiserror::Error;

use valete_mem::RefList;

use crate::source::is_source_path;

/// Output path used when `-o` is not given.
pub const DEFAULT_OUTPUT_PATH: &str = "out";

/// Parsed command line.
///
/// Borrows from the argument vector it was parsed from; the input list
/// stores the argument strings themselves, not copies.
#[derive(Debug)]
pub struct CommandLine<'a> {
    /// `-h` was given; the binary prints the help dialog.
    pub help: bool,
    /// Where compilation output will eventually go.
    pub output_path: &'a str,
    /// Source files to process, in command-line order.
    pub inputs: RefList<'a, str>,
}

/// A rejected command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// No arguments at all; the binary prints a usage line.
    #[error("no arguments given")]
    NoArguments,
    /// `-o` appeared as the last argument.
    #[error("missing output filepath after '-o'")]
    MissingOutputPath,
    /// An argument that is no flag and no `.vlt` path.
    #[error("unknown argument: '{0}'")]
    UnknownArgument(String),
}

/// Parse the arguments following the program name.
///
/// `-h` is recorded and scanning continues, so help combines with real
/// work. The first error aborts the scan.
pub fn parse(args: &[String]) -> Result<CommandLine<'_>, CliError> {
    if args.is_empty() {
        return Err(CliError::NoArguments);
    }

    let mut line = CommandLine {
        help: false,
        output_path: DEFAULT_OUTPUT_PATH,
        inputs: RefList::with_capacity(2),
    };

    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        if arg == "-h" {
            line.help = true;
        } else if arg == "-o" {
            match rest.next() {
                Some(path) => line.output_path = path,
                None => return Err(CliError::MissingOutputPath),
            }
        } else if is_source_path(arg) {
            line.inputs.push(arg.as_str());
        } else {
            return Err(CliError::UnknownArgument(arg.clone()));
        }
    }

    Ok(line)
}
