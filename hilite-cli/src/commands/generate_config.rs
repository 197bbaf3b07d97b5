//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Commented configuration template; parses to [`CliConfig::default`]
pub const TEMPLATE: &str = r#"# hilite configuration

[highlight]
# Tag name of the marker elements
element = "span"

# Class stamped on every marker; removal only touches markers carrying it
class_name = "highlight"

# Selectors of elements whose own text is never marked
filter = []
# filter = ["pre", "code", ".no-highlight"]

# Mark each space-delimited word of the keyword on its own
separate_word_search = false

# Let "cafe" match "café", "CAFÉ", ...
diacritics = true

# Send the engine's diagnostics to the log at debug level
debug = false

# Two-way synonyms: either term also matches the other
[highlight.synonyms]
# car = "automobile"
# one = "1"

[output]
# CSS selector of the search context roots
selector = "body"

# Write only the contents of body instead of the whole document
fragment = false
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists; pass --force to overwrite it",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the marker signature and matching options");
        println!("2. Use it for highlighting:");
        println!(
            "   hilite highlight -i page.html -k keyword --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// The template as a value, for callers that want the defaults
pub fn template_config() -> Result<CliConfig> {
    CliConfig::from_toml(TEMPLATE)
}
