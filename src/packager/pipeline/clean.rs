//! Removal of prior build artifacts.

use std::path::Path;

use crate::bail;
use crate::packager::error::Result;
use crate::packager::settings::Settings;
use crate::packager::utils::fs;

/// Directories the bundler leaves behind between runs.
const WORK_DIRS: [&str; 3] = ["build", "dist", "__pycache__"];

/// Removes prior build artifacts from the project directory.
///
/// Deletes the bundler's work directory, the distribution directory, the
/// bytecode cache and any leftover spec files. Missing paths are a no-op, so
/// a clean on a fresh project always succeeds.
pub async fn clean(settings: &Settings) -> Result<()> {
    for dir in WORK_DIRS {
        let path = settings.project_dir().join(dir);
        fs::remove_dir_all(&path).await?;
        log::debug!("cleaned {}", path.display());
    }

    remove_spec_files(settings.project_dir()).await
}

/// Removes leftover `*.spec` files the bundler writes next to the entry
/// script.
async fn remove_spec_files(project_dir: &Path) -> Result<()> {
    let pattern = project_dir.join("*.spec");
    let Some(pattern) = pattern.to_str() else {
        bail!("project directory is not valid UTF-8: {}", project_dir.display());
    };

    for entry in glob::glob(pattern)? {
        let path = entry?;
        fs::remove_file(&path).await?;
        log::debug!("removed leftover spec file {}", path.display());
    }

    Ok(())
}
