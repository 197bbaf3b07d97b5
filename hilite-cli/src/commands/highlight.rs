//! Highlight command implementation

use super::args::{DocumentArgs, MarkerArgs};
use super::{batch, init_logging};
use anyhow::Result;
use clap::Args;
use hilite_core::Highlighter;

/// Arguments for the highlight command
#[derive(Debug, Clone, Args)]
pub struct HighlightArgs {
    /// Keyword to highlight
    #[arg(short, long, required = true)]
    pub keyword: String,

    #[command(flatten)]
    pub document: DocumentArgs,

    #[command(flatten)]
    pub marker: MarkerArgs,
}

impl HighlightArgs {
    /// Execute the highlight command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.document.verbose, self.document.quiet);

        let config = self.document.load_config()?;
        let options = self
            .marker
            .apply(config.highlight.clone(), self.document.verbose)?;
        log::info!("Highlighting '{}'", self.keyword);
        log::debug!("Arguments: {:?}", self);

        batch::run(&self.document, &config, |document, roots| {
            let mut highlighter =
                Highlighter::new(document, roots, self.keyword.as_str(), options.clone());
            let done = highlighter.highlight();
            log::info!("Inserted {} marker(s)", highlighter.marker_count());
            done
        })
    }
}
