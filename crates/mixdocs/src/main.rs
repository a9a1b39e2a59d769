//! `AproxMixer` documentation site CLI.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `build`: Write the site as static HTML
//! - `pages`: List pages and section anchors
//! - `copy`: Copy a code sample to the terminal clipboard

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CopyArgs, ServeArgs};
use error::CliError;
use output::Output;

/// mixdocs - `AproxMixer` documentation site.
#[derive(Parser)]
#[command(name = "mixdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Build the site as static HTML.
    Build(BuildArgs),
    /// List pages and their sections in navigation order.
    Pages,
    /// Copy a code sample to the clipboard (OSC 52).
    Copy(CopyArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Serve(args) => args.verbose,
            Self::Build(args) => args.verbose,
            Self::Pages | Self::Copy(_) => false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => serve(args),
        Commands::Build(args) => args.execute(),
        Commands::Pages => commands::pages::execute(),
        Commands::Copy(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn serve(args: ServeArgs) -> Result<(), CliError> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(args.execute())
}
