//! Valete Compiler CLI
//!
//! Bootstrap skeleton: flags in, staged sources echoed out.

use std::io;
use std::process;

use valetec::cli::{self, CliError};
use valetec::echo;

fn main() {
    valetec::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let line = match cli::parse(&args) {
        Ok(line) => line,
        Err(CliError::NoArguments) => {
            println!("Usage: valete [options] <file.vlt>...");
            println!("Run 'valete -h' for details.");
            process::exit(1);
        }
        Err(err @ CliError::MissingOutputPath) => {
            eprintln!("error: {err}");
            eprintln!("Usage: valete -o <path-to-output> <file.vlt>...");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Tip: run 'valete -h' for help.");
            process::exit(1);
        }
    };

    if line.help {
        print_help();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = echo::write_sources(&mut out, &line) {
        eprintln!("error: failed to write output: {err}");
        process::exit(1);
    }
}

fn print_help() {
    println!("Valete Compiler {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: valete [options] <file.vlt>...");
    println!();
    println!("Options:");
    println!("  -h          Print this help dialog");
    println!("  -o <path>   Output file path (default: out)");
}
