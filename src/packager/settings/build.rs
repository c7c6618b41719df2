//! Build configuration handed to the bundler.

use std::path::PathBuf;

use super::DEFAULT_ENTRY_SCRIPT;

/// Configuration for the bundler invocation.
///
/// # Examples
///
/// ```no_run
/// use pdfcsv_packager::packager::BuildSettings;
///
/// let settings = BuildSettings {
///     entry_script: "app.py".into(),
///     windowed: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BuildSettings {
    /// Entry script the bundler packages.
    ///
    /// Resolved relative to the project directory unless absolute.
    pub entry_script: PathBuf,

    /// Build without a console window.
    ///
    /// Default: true
    pub windowed: bool,

    /// Icon resource embedded into the executable.
    ///
    /// Skipped with a warning if the file does not exist.
    ///
    /// Default: None
    pub icon: Option<PathBuf>,

    /// Explicit bundler program.
    ///
    /// None means the default bundler is looked up on PATH.
    ///
    /// Default: None
    pub bundler: Option<PathBuf>,

    /// Additional arguments appended to the bundler invocation.
    ///
    /// Default: empty
    pub extra_args: Vec<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            entry_script: PathBuf::from(DEFAULT_ENTRY_SCRIPT),
            windowed: true,
            icon: None,
            bundler: None,
            extra_args: Vec::new(),
        }
    }
}
