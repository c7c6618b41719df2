//! Error types for packaging operations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the packaging pipeline.
///
/// Every pipeline step is fatal-on-error: there is no retry, no rollback and
/// no partial-failure recovery. Errors carry enough context to point at the
/// failing step and the path or command involved.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Entry script handed to the bundler does not exist
    #[error("entry script not found: {0}")]
    EntryScriptMissing(PathBuf),

    /// Bundler program could not be located
    #[error("bundler `{name}` not found; install it or point --bundler at it")]
    BundlerNotFound {
        /// Program name or path that was looked up
        name: String,
    },

    /// Bundler process could not be spawned
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command that failed
        command: String,
        /// Underlying spawn error
        #[source]
        error: std::io::Error,
    },

    /// Bundler ran but exited non-zero
    #[error("bundler failed ({status}):\n{stderr}")]
    BundlerFailed {
        /// Exit status of the bundler process
        status: std::process::ExitStatus,
        /// Captured stderr of the bundler process
        stderr: String,
    },

    /// Bundler exited zero but the expected artifact is missing
    #[error("bundler reported success but produced no artifact at {0}")]
    ArtifactMissing(PathBuf),

    /// Publish directory does not exist or is not a directory
    #[error("publish directory {0} does not exist or is not a directory")]
    PublishDirMissing(PathBuf),

    /// Invalid glob pattern during spec-file cleanup
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Unreadable glob entry during spec-file cleanup
    #[error("failed to read glob entry: {0}")]
    Glob(#[from] glob::GlobError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    GenericError(String),
}

/// Attaches a message to `Option` and `Result` values.
pub trait Context<T> {
    /// Converts the value into a packaging [`Result`], prefixing errors
    /// with `msg`.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Attaches the failing operation and path to filesystem errors.
pub trait ErrorExt<T> {
    /// Converts an IO result into a packaging [`Result`], recording the
    /// operation and the path it touched.
    fn fs_context(self, op: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, op: &str, path: &Path) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{op} ({}): {e}", path.display())))
    }
}

/// Constructs an [`Error::GenericError`] from a format string and returns
/// early.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::packager::error::Error::GenericError(format!($($arg)*)).into())
    };
}
