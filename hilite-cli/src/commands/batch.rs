//! Per-file processing loop shared by the highlight and remove commands

use super::args::DocumentArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{render, OutputTarget};
use crate::progress::ProgressReporter;
use anyhow::Result;
use hilite_html::{HtmlDocument, NodeRef};

/// Run `apply` over every input document and write the results
///
/// `apply` gets the parsed document and the context roots and returns whether
/// the run succeeded. Every document is written even when it fails; the
/// failures are reported together afterwards.
pub(crate) fn run<F>(args: &DocumentArgs, config: &CliConfig, mut apply: F) -> Result<()>
where
    F: FnMut(&mut HtmlDocument, Vec<NodeRef>) -> bool,
{
    let files = resolve_patterns(&args.input)?;
    let target = OutputTarget::from_flags(args.output.as_deref(), args.in_place, files.len())?;
    let selector = args
        .selector
        .as_deref()
        .unwrap_or(config.output.selector.as_str());
    let fragment = args.fragment || config.output.fragment;

    log::info!("Processing {} file(s) with context '{selector}'", files.len());

    let mut reporter = ProgressReporter::new(args.quiet);
    reporter.init_files(files.len() as u64);

    let mut failed = Vec::new();
    for file in &files {
        let name = file.display().to_string();
        let html = FileReader::read_text(file)?;
        let mut document = HtmlDocument::parse(&html);

        let roots = document
            .select(selector)
            .map_err(|_| CliError::InvalidSelector(selector.to_string()))?;
        if roots.is_empty() {
            log::warn!("{name}: selector '{selector}' matched nothing");
        }

        if !apply(&mut document, roots) {
            failed.push(name.clone());
        }

        target.write(file, &render(&document, fragment))?;
        reporter.file_completed(&name);
    }
    reporter.finish();

    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::NoSearchContext(failed).into())
    }
}
