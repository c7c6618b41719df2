//! Command line interface for the packaging pipeline.
//!
//! This module provides argument parsing, pipeline execution and exit-code
//! mapping for the binary.

mod args;

pub use args::Args;

use crate::error::{CliError, Result};
use crate::packager::Packager;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let settings = args.to_settings()?;
    let packager = Packager::new(settings);
    let artifact = packager.run().await?;

    log::info!(
        "Packaged {} {} ({} bytes, sha256 {})",
        artifact.product_name,
        artifact.version,
        artifact.size,
        artifact.checksum
    );
    println!("{}", artifact.published.display());

    Ok(0)
}
