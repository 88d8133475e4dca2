//! Valete compiler driver: the bootstrap skeleton.
//!
//! The front-end currently parses command-line flags, validates `.vlt`
//! source paths, stages whole files in the arena, and echoes their contents
//! back. No lexing, parsing, or code generation exists yet; what lives here
//! is the orchestration the eventual pipeline grows out of, plus the
//! [`valete_mem`] substrate it will allocate from.

use std::sync::Once;

pub mod cli;
pub mod echo;
pub mod source;

pub use cli::{CliError, CommandLine};
pub use source::{SourceError, SourceStore};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, once.
///
/// Enable with `RUST_LOG=valetec=debug`. Without `RUST_LOG` set this is a
/// no-op, keeping the CLI silent by default.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
