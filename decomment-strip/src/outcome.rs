//! Per-file results and run totals

use decomment_common::StripError;
use std::path::{Path, PathBuf};

/// What happened to a file that was processed successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Comments were removed and the file was rewritten
    Rewritten,
    /// The file was written back with identical content
    Unchanged,
    /// Dry run: the file would have been rewritten
    WouldRewrite,
}

/// Result of processing one file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileStatus, StripError>,
}

impl FileOutcome {
    pub fn new(path: PathBuf, result: Result<FileStatus, StripError>) -> Self {
        Self { path, result }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Receives each outcome as soon as its file is done
pub trait Report {
    fn file_done(&mut self, outcome: FileOutcome);
}

/// Collects outcomes in memory
impl Report for Vec<FileOutcome> {
    fn file_done(&mut self, outcome: FileOutcome) {
        self.push(outcome);
    }
}

/// Totals for a whole run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub rewritten: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Add a file outcome to the summary
    pub fn add(&mut self, outcome: &FileOutcome) {
        self.processed += 1;
        match outcome.result {
            Ok(FileStatus::Rewritten) | Ok(FileStatus::WouldRewrite) => self.rewritten += 1,
            Ok(FileStatus::Unchanged) => self.unchanged += 1,
            Err(_) => self.failed += 1,
        }
    }

    /// Create a summary string
    pub fn summary(&self) -> String {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        format!(
            "{} file{} processed: {} rewritten, {} unchanged, {} failed",
            self.processed,
            plural(self.processed),
            self.rewritten,
            self.unchanged,
            self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.add(&FileOutcome::new("a.cpp".into(), Ok(FileStatus::Rewritten)));
        summary.add(&FileOutcome::new("b.h".into(), Ok(FileStatus::Unchanged)));
        summary.add(&FileOutcome::new(
            "c.h".into(),
            Err(StripError::read(
                Path::new("c.h"),
                io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            )),
        ));

        assert_eq!(
            summary,
            RunSummary {
                processed: 3,
                rewritten: 1,
                unchanged: 1,
                failed: 1,
            }
        );
        assert_eq!(summary.summary(), "3 files processed: 1 rewritten, 1 unchanged, 1 failed");
    }

    #[test]
    fn test_vec_collects_outcomes() {
        let mut sink: Vec<FileOutcome> = Vec::new();
        sink.file_done(FileOutcome::new("a.cpp".into(), Ok(FileStatus::Unchanged)));
        sink.file_done(FileOutcome::new(
            "x.cpp".into(),
            Err(StripError::write(
                Path::new("x.cpp"),
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            )),
        ));

        assert_eq!(sink.len(), 2);
        assert!(sink[0].is_success());
        assert!(!sink[1].is_success());
        assert_eq!(sink[1].path(), Path::new("x.cpp"));
    }
}
