//! Artifact publishing.

use std::path::{Path, PathBuf};

use crate::packager::error::{Error, Result};
use crate::packager::settings::Settings;
use crate::packager::utils::fs;

/// Copies the built artifact to the publish directory.
///
/// The publish directory must already exist; it is never created. Executable
/// permissions are preserved on the copy.
pub async fn publish(settings: &Settings, artifact: &Path) -> Result<PathBuf> {
    let dest_dir = settings.publish_dir();
    if !dest_dir.is_dir() {
        return Err(Error::PublishDirMissing(dest_dir.to_path_buf()));
    }

    let dest = settings.publish_path();
    fs::copy_file(artifact, &dest).await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o755)).await?;
    }

    log::info!("Published {}", dest.display());
    Ok(dest)
}
