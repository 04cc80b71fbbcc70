//! kugiri command-line entry point

use clap::Parser;
use kugiri_cli::commands::Commands;
use kugiri_cli::CliResult;

/// Split documents into sentences with language-aware punctuation tables
#[derive(Debug, Parser)]
#[command(name = "kugiri", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
