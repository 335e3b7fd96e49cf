//! lispy CLI entry point.
//!
//! Usage:
//!   lispy                  # Interactive REPL
//!   lispy -c '<expr>'      # Evaluate one expression and exit

use std::process::ExitCode;

use clap::Parser;
use lispy_repl::Cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let options = cli.options();

    if let Some(command) = &cli.command {
        return lispy_repl::run_command(&options, command);
    }

    match lispy_repl::run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
