//! Run summary types.

use super::result::ProcessingResult;

/// Counters describing a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of candidates returned by the search.
    pub candidates_found: usize,

    /// Number of candidates that produced a result row.
    pub analyzed: usize,

    /// Number of candidates dropped (e.g. no commit history).
    pub skipped: usize,

    /// Number of analyzed candidates with an active fork.
    pub active_forks_found: usize,
}

impl RunSummary {
    /// Creates a summary for a run that found `candidates_found` candidates.
    #[must_use]
    pub fn new(candidates_found: usize) -> Self {
        Self {
            candidates_found,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        match result {
            ProcessingResult::Analyzed(analysis) => {
                self.analyzed += 1;
                if analysis.active_fork.is_some() {
                    self.active_forks_found += 1;
                }
            }
            ProcessingResult::Skipped { .. } => self.skipped += 1,
        }
    }

    /// Returns true if no candidate produced a result row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.analyzed == 0
    }
}
