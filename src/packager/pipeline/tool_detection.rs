//! External bundler detection.
//!
//! Provides runtime detection of the bundler program required for the build
//! step, so a missing installation fails early with an actionable message
//! instead of a spawn error mid-pipeline.

use std::path::PathBuf;
use std::sync::LazyLock;

use crate::packager::error::{Error, Result};
use crate::packager::settings::{BuildSettings, DEFAULT_BUNDLER};

/// PATH lookup of the default bundler, with a version probe.
///
/// Cached result to avoid repeated subprocess calls across pipeline runs.
static DEFAULT_BUNDLER_PATH: LazyLock<Option<PathBuf>> =
    LazyLock::new(|| match which::which(DEFAULT_BUNDLER) {
        Ok(path) => {
            log::debug!("Found {} at: {}", DEFAULT_BUNDLER, path.display());

            match std::process::Command::new(&path).arg("--version").output() {
                Ok(output) if output.status.success() => {
                    let version = String::from_utf8_lossy(&output.stdout);
                    log::info!("{} available: {}", DEFAULT_BUNDLER, version.trim());
                    Some(path)
                }
                Ok(output) => {
                    log::warn!(
                        "{} found at {} but --version check failed (exit code: {:?}). \
                         Stderr: {}",
                        DEFAULT_BUNDLER,
                        path.display(),
                        output.status.code(),
                        String::from_utf8_lossy(&output.stderr)
                    );
                    Some(path)
                }
                Err(e) => {
                    log::warn!(
                        "{} found at {} but failed to execute: {}. \
                         Check file permissions.",
                        DEFAULT_BUNDLER,
                        path.display(),
                        e
                    );
                    None
                }
            }
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", DEFAULT_BUNDLER, e);
            None
        }
    });

/// Resolves the bundler program for a build.
///
/// An explicit bundler from the settings wins; otherwise the default bundler
/// is looked up on PATH.
pub fn resolve_bundler(build: &BuildSettings) -> Result<PathBuf> {
    if let Some(program) = &build.bundler {
        if program.is_file() {
            return Ok(program.clone());
        }
        return which::which(program).map_err(|_| Error::BundlerNotFound {
            name: program.display().to_string(),
        });
    }

    DEFAULT_BUNDLER_PATH
        .clone()
        .ok_or_else(|| Error::BundlerNotFound {
            name: DEFAULT_BUNDLER.to_string(),
        })
}
