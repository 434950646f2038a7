//! snapsight: CLI for extracting text and detecting faces in images.

mod cli;
mod output;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    use output::Output;

    let output = Output::new(cli.json);

    match cli.command {
        Commands::ExtractText(args) => cli::commands::extract_text::run(args, &output),
        Commands::DetectFaces(args) => cli::commands::detect_faces::run(args, &output),
        Commands::Formats => cli::commands::formats::run(&output),
    }
}
