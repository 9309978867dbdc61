//! Human-readable summary of the top candidates.

use super::AnalysisResult;
use std::io::{self, Write};

/// Number of candidates shown in the summary.
pub const TOP_N: usize = 5;

/// Prints the top candidates to standard output.
pub fn print_summary(results: &[AnalysisResult]) {
    let stdout = io::stdout();
    // Writing to stdout only fails if the stream is closed; nothing to report to.
    let _ = write_summary(results, &mut stdout.lock());
}

/// Writes the top [`TOP_N`] results with their key fields.
///
/// `results` are expected to be sorted by score already.
pub fn write_summary<W: Write>(results: &[AnalysisResult], out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(
        out,
        "Analysis complete! Found {} abandoned projects",
        results.len()
    )?;

    if results.is_empty() {
        return Ok(());
    }

    writeln!(out, "\nTop {} candidates:", TOP_N.min(results.len()))?;
    for (i, result) in results.iter().take(TOP_N).enumerate() {
        writeln!(out, "{}. {}", i + 1, result.full_name())?;
        writeln!(
            out,
            "   Stars: {} | Abandoned: {} days | Score: {}",
            format_thousands(u64::from(result.stars)),
            result.days_abandoned,
            result.score
        )?;
        if let Some(fork) = &result.active_fork {
            writeln!(
                out,
                "   Active fork: {} ({} stars)",
                fork.full_name,
                format_thousands(u64::from(fork.stars))
            )?;
        }
    }

    Ok(())
}

/// Formats `n` with comma thousands separators, e.g. `12345` -> `12,345`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
