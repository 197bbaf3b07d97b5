//! Output handling module

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use hilite_html::HtmlDocument;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where processed documents are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Concatenate every document on stdout
    Stdout,
    /// Write the single processed document to a file
    File(PathBuf),
    /// Overwrite each input file
    InPlace,
}

impl OutputTarget {
    /// Pick the target from the command-line flags
    pub fn from_flags(output: Option<&Path>, in_place: bool, file_count: usize) -> Result<Self> {
        match (output, in_place) {
            (Some(_), true) => Err(CliError::OutputConflict(
                "--output and --in-place cannot be combined".to_string(),
            )
            .into()),
            (Some(path), false) if file_count > 1 => Err(CliError::OutputConflict(format!(
                "--output {} needs a single input file, got {file_count}; use --in-place",
                path.display()
            ))
            .into()),
            (Some(path), false) => Ok(Self::File(path.to_path_buf())),
            (None, true) => Ok(Self::InPlace),
            (None, false) => Ok(Self::Stdout),
        }
    }

    /// Write the rendering of `source`
    pub fn write(&self, source: &Path, html: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(html.as_bytes())
                    .and_then(|()| {
                        if html.ends_with('\n') {
                            Ok(())
                        } else {
                            stdout.write_all(b"\n")
                        }
                    })
                    .context("Failed to write to stdout")
            }
            Self::File(path) => FileReader::write_text(path, html),
            Self::InPlace => FileReader::write_text(source, html),
        }
    }
}

/// Serialize a document, or only its `body` contents for fragments
pub fn render(document: &HtmlDocument, fragment: bool) -> String {
    if fragment {
        document.body_html()
    } else {
        document.to_html()
    }
}
