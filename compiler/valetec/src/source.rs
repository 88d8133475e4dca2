//! Source-file recognition and staging.
//!
//! Valete sources carry the `.vlt` extension. [`SourceStore`] reads whole
//! files and stages their bytes in the arena, where the eventual lexer will
//! consume them; the store hands back [`ArenaRef`] handles instead of owned
//! buffers so staged sources share one teardown.
//!
//! Read failures are expected events (missing files, permissions) and come
//! back as [`SourceError`] values with user-facing messages.

use std::io;
use std::path::Path;

use thiserror::Error;

use valete_mem::{Arena, ArenaRef};

/// Extension that marks a Valete source file, compared ASCII
/// case-insensitively.
pub const SOURCE_EXTENSION: &str = "vlt";

/// Staging arena capacity before the first overflow block (64 KiB).
const DEFAULT_STORE_CAPACITY: usize = 64 * 1024;

/// Returns `true` if `path` names a Valete source file.
pub fn is_source_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

/// A failed source read.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot find file '{path}'")]
    NotFound {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("permission denied reading '{path}'")]
    PermissionDenied {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    fn from_io(path: &str, source: io::Error) -> Self {
        let path = path.to_owned();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }
}

/// Arena-backed store of staged source files.
pub struct SourceStore {
    arena: Arena,
}

impl SourceStore {
    /// Create a store with the default staging capacity.
    pub fn new() -> Self {
        Self::with_arena_capacity(DEFAULT_STORE_CAPACITY)
    }

    /// Create a store whose arena starts at `bytes` capacity.
    pub fn with_arena_capacity(bytes: usize) -> Self {
        Self {
            arena: Arena::with_capacity(bytes),
        }
    }

    /// Read the whole file at `path` and stage its bytes in the arena.
    pub fn load(&mut self, path: &str) -> Result<ArenaRef, SourceError> {
        let bytes = std::fs::read(path).map_err(|e| SourceError::from_io(path, e))?;
        tracing::debug!(path, len = bytes.len(), "staged source file");
        Ok(self.arena.alloc_bytes(&bytes))
    }

    /// The staged bytes behind a handle returned by [`SourceStore::load`].
    pub fn bytes(&self, source: ArenaRef) -> &[u8] {
        self.arena.get(source)
    }

    /// The staging arena itself, for capacity introspection.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }
}

impl Default for SourceStore {
    fn default() -> Self {
        Self::new()
    }
}
