//! Processing result types.

use crate::report::AnalysisResult;

/// Outcome of analyzing a single candidate repository.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// The candidate was analyzed and produced a result row.
    Analyzed(AnalysisResult),

    /// The candidate was dropped from the report.
    Skipped {
        /// Repository full name.
        repository: String,
        /// Reason for skipping.
        reason: String,
    },
}
