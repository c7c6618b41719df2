//! Packaging pipeline orchestration and coordination.
//!
//! This module provides the [`Packager`] orchestrator that runs the pipeline
//! steps in strict sequence: clean, then build, then publish. Each step must
//! complete before the next begins; the first failure aborts the run with no
//! cleanup of partial state.

mod build;
mod checksum;
mod clean;
mod publish;
mod tool_detection;

pub use checksum::calculate_sha256;
pub use tool_detection::resolve_bundler;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::packager::error::{ErrorExt, Result};
use crate::packager::settings::Settings;

/// Result of a completed pipeline run.
///
/// Serialized as a JSON receipt next to the artifact
/// (`dist/<product>.receipt.json`).
#[derive(Debug, Clone, Serialize)]
pub struct PackagedArtifact {
    /// Product name of the executable.
    pub product_name: String,

    /// Version recorded for this build.
    pub version: String,

    /// Description of the packaged application.
    pub description: String,

    /// Path of the artifact inside the distribution directory.
    pub artifact: PathBuf,

    /// Path the artifact was published to.
    pub published: PathBuf,

    /// Artifact size in bytes.
    pub size: u64,

    /// Hex-encoded SHA-256 checksum of the artifact.
    pub checksum: String,

    /// Time the build completed.
    pub built_at: DateTime<Utc>,
}

/// Main pipeline orchestrator.
///
/// Coordinates the clean, build and publish steps and collects artifact
/// metadata.
///
/// # Examples
///
/// ```no_run
/// use pdfcsv_packager::packager::{Packager, Settings};
///
/// # async fn example(settings: Settings) -> pdfcsv_packager::packager::Result<()> {
/// let packager = Packager::new(settings);
/// let artifact = packager.run().await?;
/// println!("published {}", artifact.published.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
}

impl Packager {
    /// Creates a new packager with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the packager settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Removes prior build artifacts from the project directory.
    pub async fn clean(&self) -> Result<()> {
        clean::clean(&self.settings).await
    }

    /// Invokes the bundler and returns the path of the built artifact.
    pub async fn build(&self) -> Result<PathBuf> {
        build::build(&self.settings).await
    }

    /// Copies a built artifact to the publish directory.
    pub async fn publish(&self, artifact: &std::path::Path) -> Result<PathBuf> {
        publish::publish(&self.settings, artifact).await
    }

    /// Runs the full pipeline: clean, build, publish.
    ///
    /// On success the build receipt is written next to the artifact and the
    /// collected metadata is returned.
    pub async fn run(&self) -> Result<PackagedArtifact> {
        self.clean().await?;
        let artifact = self.build().await?;

        let metadata = tokio::fs::metadata(&artifact)
            .await
            .fs_context("reading artifact metadata", &artifact)?;
        let checksum = calculate_sha256(&artifact).await?;

        let published = self.publish(&artifact).await?;

        let result = PackagedArtifact {
            product_name: self.settings.product_name().to_string(),
            version: self.settings.version_string().to_string(),
            description: self.settings.description().to_string(),
            artifact,
            published,
            size: metadata.len(),
            checksum,
            built_at: Utc::now(),
        };

        self.write_receipt(&result).await?;
        Ok(result)
    }

    /// Writes the build receipt into the distribution directory.
    async fn write_receipt(&self, artifact: &PackagedArtifact) -> Result<()> {
        let path = self.settings.receipt_path();
        let json = serde_json::to_vec_pretty(artifact)?;

        tokio::fs::write(&path, json)
            .await
            .fs_context("writing build receipt", &path)?;

        log::debug!("wrote build receipt {}", path.display());
        Ok(())
    }
}
