//! keyrank command-line entry point

use clap::Parser;
use keyrank_cli::commands::Commands;
use keyrank_cli::CliResult;

/// Ranked keyphrase extraction for content-quality scoring
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
