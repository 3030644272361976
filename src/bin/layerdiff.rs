//! layerdiff CLI Binary
//!
//! Compares two directory trees and prints the changeset.

use clap::Parser;
use layerdiff::cli::{map_error, Cli, RunContext};
use layerdiff::logging::init_logging;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    // Configuration carries the logging settings, so it is loaded first.
    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&context.config().logging)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(config = ?context.config(), "Effective configuration");

    match context.execute(&cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
