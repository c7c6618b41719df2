//! Core packaging pipeline.
//!
//! The pipeline runs three operations in strict sequence: [`clean`], [`build`]
//! and [`publish`], orchestrated by [`Packager`]. Configuration is held in
//! [`Settings`], constructed via [`SettingsBuilder`].
//!
//! [`clean`]: Packager::clean
//! [`build`]: Packager::build
//! [`publish`]: Packager::publish

pub mod error;
pub mod pipeline;
pub mod settings;
pub mod utils;

// Re-export all public types
pub use error::{Error, Result};
pub use pipeline::{PackagedArtifact, Packager};
pub use settings::{BuildSettings, PackageSettings, Settings, SettingsBuilder};
