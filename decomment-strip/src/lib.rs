pub mod outcome;
pub mod stripper;
pub mod walker;
pub mod tests;

pub use decomment_common::{StripConfig, StripError};
pub use outcome::{FileOutcome, FileStatus, Report, RunSummary};
pub use stripper::{strip, strip_line, ScanState};
pub use walker::Walker;
