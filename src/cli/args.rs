//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with proper
//! validation and error handling. Every flag is optional: invoked bare, the
//! binary runs the default clean-build-publish sequence.

use clap::Parser;
use std::path::PathBuf;

use crate::packager::settings::{
    BuildSettings, PackageSettings, Settings, SettingsBuilder, DEFAULT_ENTRY_SCRIPT,
    DEFAULT_PRODUCT_NAME, DEFAULT_PUBLISH_DIR,
};

/// Desktop packaging pipeline for script applications
#[derive(Parser, Debug)]
#[command(
    name = "pdfcsv_packager",
    version,
    about = "Builds a single-file windowed executable and publishes it",
    long_about = "Cleans previous build artifacts, invokes the bundler to produce one
self-contained windowed executable, then copies it to the publish directory.

Usage:
  pdfcsv_packager
  pdfcsv_packager --entry app.py --name PDFCSVTool
  pdfcsv_packager --publish-dir /home/dustin/public_html

Exit code 0 = artifact guaranteed to exist at the publish path."
)]
pub struct Args {
    /// Entry script handed to the bundler
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_ENTRY_SCRIPT, env = "PACKAGER_ENTRY")]
    pub entry: PathBuf,

    /// Name of the produced executable
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_PRODUCT_NAME, env = "PACKAGER_NAME")]
    pub name: String,

    /// Icon resource embedded into the executable (skipped when absent)
    #[arg(long, value_name = "FILE", env = "PACKAGER_ICON")]
    pub icon: Option<PathBuf>,

    /// Directory the finished artifact is copied to
    #[arg(short = 'p', long, value_name = "DIR", default_value = DEFAULT_PUBLISH_DIR, env = "PACKAGER_PUBLISH_DIR")]
    pub publish_dir: PathBuf,

    /// Project directory containing the entry script
    #[arg(long, value_name = "DIR", default_value = ".", env = "PACKAGER_PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Bundler program (defaults to pyinstaller from PATH)
    #[arg(long, value_name = "PROGRAM", env = "PACKAGER_BUNDLER")]
    pub bundler: Option<PathBuf>,

    /// Extra argument passed through to the bundler (repeatable)
    #[arg(long = "bundler-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub bundler_args: Vec<String>,

    /// Build with a console window instead of a windowed app
    #[arg(long)]
    pub console: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("product name must not be empty".to_string());
        }

        // The name becomes a file name under dist/ and the publish directory
        if self.name.chars().any(|c| c == '/' || c == '\\') || self.name == "." || self.name == ".."
        {
            return Err(format!(
                "product name must be a plain file name, got: {}",
                self.name
            ));
        }

        if self.entry.as_os_str().is_empty() {
            return Err("entry script must not be empty".to_string());
        }

        Ok(())
    }

    /// Builds pipeline settings from the parsed arguments.
    pub fn to_settings(&self) -> crate::packager::Result<Settings> {
        SettingsBuilder::new()
            .project_dir(&self.project_dir)
            .publish_dir(&self.publish_dir)
            .package_settings(PackageSettings {
                product_name: self.name.clone(),
                ..Default::default()
            })
            .build_settings(BuildSettings {
                entry_script: self.entry.clone(),
                windowed: !self.console,
                icon: self.icon.clone(),
                bundler: self.bundler.clone(),
                extra_args: self.bundler_args.clone(),
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_from(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("argv should parse")
    }

    #[test]
    fn bare_invocation_uses_fixed_defaults() {
        let args = args_from(&["pdfcsv_packager"]);

        assert_eq!(args.entry, PathBuf::from(DEFAULT_ENTRY_SCRIPT));
        assert_eq!(args.name, DEFAULT_PRODUCT_NAME);
        assert_eq!(args.publish_dir, PathBuf::from(DEFAULT_PUBLISH_DIR));
        assert!(!args.console);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn product_name_must_be_a_plain_file_name() {
        let args = args_from(&["pdfcsv_packager", "--name", "nested/Tool"]);
        assert!(args.validate().is_err());

        let args = args_from(&["pdfcsv_packager", "--name", ""]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn console_flag_disables_windowed_build() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let args = args_from(&[
            "pdfcsv_packager",
            "--console",
            "--project-dir",
            tmp.path().to_str().expect("utf-8 tempdir"),
        ]);

        let settings = args.to_settings().expect("settings should build");
        assert!(!settings.build_settings().windowed);
    }

    #[test]
    fn bundler_args_pass_through() {
        let args = args_from(&[
            "pdfcsv_packager",
            "--bundler-arg",
            "--clean",
            "--bundler-arg",
            "--log-level=WARN",
        ]);

        let settings = args.to_settings().expect("settings should build");
        assert_eq!(
            settings.build_settings().extra_args,
            vec!["--clean".to_string(), "--log-level=WARN".to_string()]
        );
    }
}
