//! Builder for constructing Settings.

use super::{BuildSettings, PackageSettings, Settings, DEFAULT_PUBLISH_DIR};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building pipeline settings with validation.
///
/// # Examples
///
/// ```no_run
/// use pdfcsv_packager::packager::{SettingsBuilder, PackageSettings, BuildSettings};
///
/// # fn example() -> pdfcsv_packager::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_dir(".")
///     .publish_dir("/home/dustin/public_html")
///     .package_settings(PackageSettings {
///         product_name: "PDFCSVTool".into(),
///         ..Default::default()
///     })
///     .build_settings(BuildSettings {
///         entry_script: "app.py".into(),
///         windowed: true,
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Default)]
pub struct SettingsBuilder {
    project_dir: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    build_settings: BuildSettings,
    publish_dir: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project directory.
    ///
    /// This is where the entry script lives and where the bundler's work
    /// directories are created and cleaned.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets build configuration.
    ///
    /// Default: [`BuildSettings::default`]
    pub fn build_settings(mut self, settings: BuildSettings) -> Self {
        self.build_settings = settings;
        self
    }

    /// Sets the publish directory.
    ///
    /// Default: the fixed distribution directory.
    pub fn publish_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.publish_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// Both directories are normalized to absolute paths so the pipeline
    /// stays anchored if the working directory changes mid-run.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `project_dir`
    /// - `package_settings`
    pub fn build(self) -> crate::packager::Result<Settings> {
        use crate::packager::error::{Context, ErrorExt};

        let project_dir = self.project_dir.context("project_dir is required")?;
        let project_dir = project_dir
            .absolutize()
            .fs_context("resolving project directory", &project_dir)?
            .to_path_buf();

        let publish_dir = self
            .publish_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLISH_DIR));
        let publish_dir = publish_dir
            .absolutize()
            .fs_context("resolving publish directory", &publish_dir)?
            .to_path_buf();

        Ok(Settings::new(
            self.package_settings
                .context("package_settings is required")?,
            self.build_settings,
            project_dir,
            publish_dir,
        ))
    }
}
