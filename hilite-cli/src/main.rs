//! hilite command-line entry point

use clap::Parser;
use hilite_cli::commands::Commands;

/// Highlight keywords in HTML files and remove the highlighting again
#[derive(Debug, Parser)]
#[command(name = "hilite", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
