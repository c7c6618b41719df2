//! Bundler invocation.
//!
//! Runs the external bundler to produce one self-contained executable from
//! the configured entry script. A non-zero bundler exit is a hard failure
//! with no retry; the tool's stderr is surfaced verbatim.

use std::path::PathBuf;

use super::tool_detection::resolve_bundler;
use crate::packager::error::{Error, Result};
use crate::packager::settings::Settings;

/// Builds the single-file executable.
///
/// Preconditions: the entry script exists and the bundler can be resolved.
/// Postcondition: the artifact exists at `dist/<product>`, verified even
/// when the bundler exits zero.
pub async fn build(settings: &Settings) -> Result<PathBuf> {
    let entry = settings.entry_script_path();
    if !entry.is_file() {
        return Err(Error::EntryScriptMissing(entry));
    }

    let bundler = resolve_bundler(settings.build_settings())?;
    let args = bundler_args(settings);

    log::info!(
        "Building {} from {}",
        settings.product_name(),
        entry.display()
    );
    log::debug!("{} {}", bundler.display(), args.join(" "));

    let output = tokio::process::Command::new(&bundler)
        .args(&args)
        .current_dir(settings.project_dir())
        .output()
        .await
        .map_err(|e| Error::CommandFailed {
            command: bundler.display().to_string(),
            error: e,
        })?;

    if !output.status.success() {
        return Err(Error::BundlerFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let artifact = settings.artifact_path();
    if !artifact.is_file() {
        return Err(Error::ArtifactMissing(artifact));
    }

    log::info!("Built {}", artifact.display());
    Ok(artifact)
}

/// Argument list for a one-file bundler invocation.
///
/// The entry script is always the final argument.
fn bundler_args(settings: &Settings) -> Vec<String> {
    let build = settings.build_settings();
    let mut args = vec!["--onefile".to_string(), "--noconfirm".to_string()];

    if build.windowed {
        args.push("--windowed".to_string());
    }

    args.push("--name".to_string());
    args.push(settings.product_name().to_string());

    if let Some(icon) = &build.icon {
        if icon.is_file() {
            args.push("--icon".to_string());
            args.push(icon.display().to_string());
        } else {
            log::warn!("icon {} not found, building without one", icon.display());
        }
    }

    args.extend(build.extra_args.iter().cloned());
    args.push(settings.entry_script_path().display().to_string());
    args
}
