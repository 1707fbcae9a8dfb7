//! docnav CLI - Documentation navigation chrome.
//!
//! Provides commands for:
//! - `resolve`: Print the navigation chrome for a route as JSON
//! - `check`: Validate the configuration and report warnings
//! - `styles`: Print heading CSS

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ResolveArgs, StylesArgs};
use output::Output;

/// docnav - Documentation navigation chrome.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the navigation chrome for a route.
    Resolve(ResolveArgs),
    /// Validate the configuration.
    Check(CheckArgs),
    /// Print heading CSS.
    Styles(StylesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Resolve(args) => args.verbose,
        Commands::Check(args) => args.verbose,
        Commands::Styles(_) => false,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Styles(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
