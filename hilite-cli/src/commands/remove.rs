//! Remove command implementation

use super::args::{DocumentArgs, MarkerArgs};
use super::{batch, init_logging};
use anyhow::Result;
use clap::Args;
use hilite_core::Highlighter;

/// Arguments for the remove command
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Only remove markers around this keyword (default: every marker)
    #[arg(short, long, default_value = "")]
    pub keyword: String,

    #[command(flatten)]
    pub document: DocumentArgs,

    #[command(flatten)]
    pub marker: MarkerArgs,
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.document.verbose, self.document.quiet);

        let config = self.document.load_config()?;
        let options = self
            .marker
            .apply(config.highlight.clone(), self.document.verbose)?;
        if self.keyword.is_empty() {
            log::info!("Removing every '{}.{}' marker", options.element, options.class_name);
        } else {
            log::info!("Removing markers around '{}'", self.keyword);
        }

        batch::run(&self.document, &config, |document, roots| {
            Highlighter::new(document, roots, self.keyword.as_str(), options.clone())
                .remove_highlight()
        })
    }
}
