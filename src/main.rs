// src/main.rs

use clap::Parser;
use licsweep::cli::Cli;
use licsweep::errors::AppError;
use licsweep::signal::setup_signal_handler;
use std::path::Path;

fn main() {
    let args = Cli::parse();

    // Initialize logging. The -v flag lowers the console filter to debug;
    // RUST_LOG still wins when set explicitly.
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::info!("Starting licsweep v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let token = match setup_signal_handler() {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = licsweep::run(
        Path::new(&args.source_dir),
        Path::new(&args.output_dir),
        &token,
    );

    match result {
        Ok(outcome) => {
            log::info!(
                "Done. Collected {} files ({} skipped, {} ignored).",
                outcome.collected,
                outcome.skipped,
                outcome.ignored
            );
        }
        Err(AppError::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
