//! Core Settings struct and implementations.

use super::{BuildSettings, PackageSettings};
use std::path::{Path, PathBuf};

/// Main settings for packaging operations.
///
/// Central configuration for the pipeline, constructed via
/// [`SettingsBuilder`](super::SettingsBuilder). Contains package metadata,
/// build settings and the directories the pipeline touches.
///
/// # Examples
///
/// ```no_run
/// use pdfcsv_packager::packager::{SettingsBuilder, PackageSettings};
///
/// # fn example() -> pdfcsv_packager::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_dir(".")
///     .package_settings(PackageSettings {
///         product_name: "PDFCSVTool".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// Build configuration.
    build_settings: BuildSettings,

    /// Project directory the pipeline operates in.
    ///
    /// The entry script lives here; `build/`, `dist/` and spec files are
    /// created and cleaned here.
    project_dir: PathBuf,

    /// Directory the finished artifact is copied to.
    publish_dir: PathBuf,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package description.
    pub fn description(&self) -> &str {
        &self.package.description
    }

    /// Returns the project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Returns the publish directory.
    pub fn publish_dir(&self) -> &Path {
        &self.publish_dir
    }

    /// Returns the build settings.
    pub fn build_settings(&self) -> &BuildSettings {
        &self.build_settings
    }

    /// Returns the full path to the entry script.
    ///
    /// Relative entry scripts are resolved against the project directory.
    pub fn entry_script_path(&self) -> PathBuf {
        if self.build_settings.entry_script.is_absolute() {
            self.build_settings.entry_script.clone()
        } else {
            self.project_dir.join(&self.build_settings.entry_script)
        }
    }

    /// Returns the bundler's distribution directory inside the project.
    pub fn dist_dir(&self) -> PathBuf {
        self.project_dir.join("dist")
    }

    /// Returns the expected path of the built artifact.
    ///
    /// Automatically appends `.exe` extension on Windows.
    pub fn artifact_path(&self) -> PathBuf {
        let mut path = self.dist_dir().join(&self.package.product_name);

        if cfg!(target_os = "windows") {
            path.set_extension("exe");
        }

        path
    }

    /// Returns the path the build receipt is written to.
    pub fn receipt_path(&self) -> PathBuf {
        self.dist_dir()
            .join(format!("{}.receipt.json", self.package.product_name))
    }

    /// Returns the path the artifact is published to.
    pub fn publish_path(&self) -> PathBuf {
        let artifact = self.artifact_path();
        match artifact.file_name() {
            Some(name) => self.publish_dir.join(name),
            None => self.publish_dir.join(&self.package.product_name),
        }
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        build_settings: BuildSettings,
        project_dir: PathBuf,
        publish_dir: PathBuf,
    ) -> Self {
        Self {
            package,
            build_settings,
            project_dir,
            publish_dir,
        }
    }
}
