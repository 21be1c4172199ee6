//! rstgen CLI - reStructuredText authoring assistant.
//!
//! Provides commands for:
//! - `serve`: Start the HTTP backend
//! - `format`: Print the fragment for one content kind
//! - `compose`: Replay an editing script and write the document

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ComposeArgs, FormatArgs, ServeArgs};
use output::Output;

/// rstgen - reStructuredText authoring assistant.
#[derive(Parser)]
#[command(name = "rstgen", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP backend.
    Serve(ServeArgs),
    /// Format one content kind and print the fragment.
    Format(FormatArgs),
    /// Replay an editing script and write the resulting document.
    Compose(ComposeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute())
        }
        Commands::Format(args) => args.execute(),
        Commands::Compose(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
