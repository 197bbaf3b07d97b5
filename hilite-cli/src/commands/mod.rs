//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use hilite_core::DIACRITIC_CLASSES;

pub mod args;
mod batch;
pub mod generate_config;
pub mod highlight;
pub mod remove;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Wrap every match of a keyword in marker elements
    Highlight(highlight::HighlightArgs),

    /// Remove marker elements and merge their text back
    Remove(remove::RemoveArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List built-in tables and defaults
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List the diacritic equivalence classes
    Diacritics,

    /// Print the default configuration as TOML
    Defaults,
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Highlight(args) => args.execute(),
            Commands::Remove(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    fn render(self) -> Result<String> {
        match self {
            ListCommands::Diacritics => Ok(DIACRITIC_CLASSES
                .iter()
                .map(|class| {
                    let base = class.chars().next().unwrap_or(' ');
                    format!("{base}  {class}\n")
                })
                .collect()),
            ListCommands::Defaults => crate::config::CliConfig::default().to_toml(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` still takes precedence over the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
