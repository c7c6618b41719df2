//! Desktop packaging pipeline library.
//!
//! This library provides the core packaging functionality:
//! - Cleaning previous build artifacts (work dirs, distribution dir, spec files)
//! - Building a single-file windowed executable via an external bundler
//! - Publishing the artifact to a distribution directory
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
pub use packager::{PackagedArtifact, Packager};
