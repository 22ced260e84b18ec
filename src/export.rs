//! CSV export for filtered papers

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::filter::FilteredPaper;

/// Write filtered papers to a CSV file, returning the number of rows written
///
/// The header row comes from the record's column names, in field order. The
/// destination file is created or overwritten. Callers must pass a non-empty
/// slice; the CLI reports "no relevant papers" instead of writing an empty
/// file.
///
/// # Errors
///
/// Filesystem and serialization failures propagate as
/// [`PubMedError::CsvError`](crate::PubMedError::CsvError) or
/// [`PubMedError::IoError`](crate::PubMedError::IoError).
pub fn save_to_csv(papers: &[FilteredPaper], path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;

    for paper in papers {
        writer.serialize(paper)?;
    }
    writer.flush()?;

    info!(rows = papers.len(), path = %path.display(), "Saved filtered papers");
    Ok(papers.len())
}
