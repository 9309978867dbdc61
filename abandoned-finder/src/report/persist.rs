//! CSV persistence.

use super::result::CsvRow;
use super::{AnalysisResult, ReportError};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes `results` to `path` as CSV, returning the number of rows written.
///
/// An empty result set is a no-op: nothing is created and `Ok(0)` is
/// returned.
///
/// # Errors
///
/// Returns [`ReportError`] if the file cannot be created or written.
pub fn persist(results: &[AnalysisResult], path: &Path) -> Result<usize, ReportError> {
    if results.is_empty() {
        info!("No results to save");
        return Ok(0);
    }

    let file = File::create(path).map_err(|e| ReportError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    write_csv(results, file)?;

    info!(path = %path.display(), rows = results.len(), "Results saved");
    Ok(results.len())
}

/// Writes the header and one row per result to `out`.
///
/// # Errors
///
/// Returns [`ReportError::CsvError`] if serialization or flushing fails.
pub fn write_csv<W: Write>(results: &[AnalysisResult], out: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(out);
    for result in results {
        writer.serialize(CsvRow::from(result))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
