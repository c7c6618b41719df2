//! Configuration structures for the packaging pipeline.
//!
//! This module provides the configuration types for packaging operations,
//! including package metadata, build settings and a builder pattern for
//! constructing settings.

mod build;
mod builder;
mod core;
mod package;

// Re-export all public types
pub use self::build::BuildSettings;
pub use self::builder::SettingsBuilder;
pub use self::core::Settings;
pub use self::package::PackageSettings;

/// Entry script handed to the bundler when none is configured.
pub const DEFAULT_ENTRY_SCRIPT: &str = "app.py";

/// Name of the produced executable when none is configured.
pub const DEFAULT_PRODUCT_NAME: &str = "PDFCSVTool";

/// Distribution directory the finished artifact is copied to when none is
/// configured.
pub const DEFAULT_PUBLISH_DIR: &str = "/home/dustin/public_html";

/// Bundler program looked up on PATH when none is configured.
pub const DEFAULT_BUNDLER: &str = "pyinstaller";
