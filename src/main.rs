//! PDFCSV packager - desktop packaging pipeline binary.
//!
//! This binary cleans stale build artifacts, drives the external bundler to
//! produce a single-file windowed executable, and copies the result to the
//! publish directory.

mod cli;
mod error;
mod packager;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
