//! Analysis, persistence, and reporting of abandoned repositories.

mod analyze;
mod error;
mod persist;
mod result;
mod summarize;

pub use analyze::{analyze, AnalysisOptions};
pub use error::ReportError;
pub use persist::{persist, write_csv};
pub use result::AnalysisResult;
pub use summarize::{format_thousands, print_summary, write_summary, TOP_N};
