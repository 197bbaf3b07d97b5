//! Arguments shared by the highlight and remove commands

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use hilite_core::Options;
use std::path::PathBuf;

/// Which documents to read, where to search, and where to write
#[derive(Debug, Clone, Args)]
pub struct DocumentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// CSS selector of the search context roots [default: body]
    #[arg(short, long, value_name = "SELECTOR")]
    pub selector: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite each input file with its result
    #[arg(long)]
    pub in_place: bool,

    /// Emit only the contents of body
    #[arg(long)]
    pub fragment: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "HILITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DocumentArgs {
    /// Load the configuration file, or the defaults without one
    pub fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::load(path),
            None => Ok(CliConfig::default()),
        }
    }
}

/// Marker signature and matching flags, layered over the configuration
#[derive(Debug, Clone, Default, Args)]
pub struct MarkerArgs {
    /// Tag name of marker elements
    #[arg(long, value_name = "TAG")]
    pub element: Option<String>,

    /// Class stamped on marker elements
    #[arg(long, value_name = "CLASS")]
    pub class_name: Option<String>,

    /// Selector of elements to leave alone (repeatable)
    #[arg(long, value_name = "SELECTOR")]
    pub filter: Vec<String>,

    /// Treat each space-delimited word of the keyword on its own
    #[arg(long)]
    pub separate_words: bool,

    /// Match accented letters literally
    #[arg(long)]
    pub no_diacritics: bool,

    /// Two-way synonym pair TERM=SYNONYM (repeatable)
    #[arg(long, value_name = "TERM=SYNONYM", value_parser = parse_synonym)]
    pub synonym: Vec<(String, String)>,
}

impl MarkerArgs {
    /// Apply the flags on top of `options` and validate the result
    ///
    /// Verbosity of two or more turns on the engine's debug diagnostics.
    pub fn apply(&self, mut options: Options, verbose: u8) -> Result<Options> {
        if let Some(element) = &self.element {
            options.element = element.clone();
        }
        if let Some(class_name) = &self.class_name {
            options.class_name = class_name.clone();
        }
        options.filter.extend(self.filter.iter().cloned());
        if self.separate_words {
            options.separate_word_search = true;
        }
        if self.no_diacritics {
            options.diacritics = false;
        }
        for (term, synonym) in &self.synonym {
            options.synonyms.insert(term.clone(), synonym.clone());
        }
        if verbose >= 2 {
            options.debug = true;
        }

        options
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        if let Err(e) = options.check_synonym_overlap() {
            log::warn!("{e}");
        }

        Ok(options)
    }
}

/// Parse a `TERM=SYNONYM` pair
pub fn parse_synonym(value: &str) -> std::result::Result<(String, String), String> {
    let (term, synonym) = value
        .split_once('=')
        .ok_or_else(|| format!("expected TERM=SYNONYM, got '{value}'"))?;
    let (term, synonym) = (term.trim(), synonym.trim());

    if term.is_empty() || synonym.is_empty() {
        return Err(format!("empty term in '{value}'"));
    }

    Ok((term.to_string(), synonym.to_string()))
}
