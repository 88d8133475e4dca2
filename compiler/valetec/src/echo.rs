//! Echo driver for the bootstrap skeleton.
//!
//! Until the real pipeline exists, the tool's observable behavior is to
//! print the resolved output path and each staged input. A file that fails
//! to load is reported on stderr and skipped; the run continues with the
//! remaining inputs and still counts as a success.

use std::io::{self, Write};

use crate::cli::CommandLine;
use crate::source::SourceStore;

/// Write the output path, then each input path followed by its contents.
///
/// Output goes through `out` so tests can capture it; per-file read errors
/// go to stderr.
pub fn write_sources<W: Write>(out: &mut W, line: &CommandLine<'_>) -> io::Result<()> {
    writeln!(out, "output path = {}", line.output_path)?;

    let mut store = SourceStore::new();
    for (index, path) in line.inputs.iter().enumerate() {
        writeln!(out, "input[{index}] = {path}")?;
        match store.load(path) {
            Ok(source) => {
                out.write_all(store.bytes(source))?;
                writeln!(out)?;
            }
            Err(err) => {
                tracing::warn!(path, "skipping unreadable input");
                eprintln!("{err}");
            }
        }
    }

    Ok(())
}
