//! GatorShare Bundler - standalone executable packaging for the server and client.
//!
//! This binary drives mkbundle to produce self-contained native executables
//! and installs the web host next to them, failing fast on the first error.

use gatorshare_bundler::cli::OutputManager;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match gatorshare_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            let _ = OutputManager::new(false, false).error(&e.to_string());
            1
        }
    };

    process::exit(exit_code);
}
