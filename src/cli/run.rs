use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::SiftError;
use crate::models::Document;
use crate::reporting::{filter_document, to_pretty_json};

/// Loads the report at `path`, filters it and writes the failing results to
/// `out`. Nothing is written unless the whole output rendered successfully.
pub fn handle_run(path: &Path, out: &mut impl Write) -> Result<(), SiftError> {
    let rendered = render(path)?;
    writeln!(out, "{}", rendered)?;
    out.flush()?;
    Ok(())
}

pub fn render(path: &Path) -> Result<String, SiftError> {
    info!(path = %path.display(), "Reading scanner results");
    let document = Document::load(path)?;

    let outcome = filter_document(document);
    let summary = &outcome.summary;
    info!(
        results_seen = summary.results_seen,
        results_kept = summary.results_kept,
        controls_seen = summary.controls_seen,
        controls_kept = summary.controls_kept,
        "Filtered passed controls"
    );

    to_pretty_json(&outcome.results)
}
