//! # ShoeCart CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging)
//! 3. Load configuration (file + environment)
//! 4. Build catalog, storage and notifier, then the CartStore
//! 5. Run the requested command and print the cart

use std::process::ExitCode;

use clap::Parser;
use shoecart_cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shoecart_cli::run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shoecart: {}", e);
            ExitCode::FAILURE
        }
    }
}
