use colored::*;
use decomment_strip::{FileOutcome, FileStatus, Report, RunSummary};

/// Prints one line per file to stdout and failures to stderr
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Format the console line for a file outcome
    pub fn line(&self, outcome: &FileOutcome) -> String {
        let path = outcome.path().display();
        match &outcome.result {
            Ok(FileStatus::Rewritten) => format!("{} {}", "Processed:".green(), path),
            Ok(FileStatus::Unchanged) if self.dry_run => {
                format!("{} {}", "Unchanged:".dimmed(), path)
            }
            Ok(FileStatus::Unchanged) => format!("{} {}", "Processed:".dimmed(), path),
            Ok(FileStatus::WouldRewrite) => format!("{} {}", "Would rewrite:".yellow(), path),
            Err(err) => format!("{} {}: {}", "Error processing".red().bold(), path, err),
        }
    }

    /// Print the end-of-run totals
    pub fn print_summary(&self, summary: &RunSummary) {
        let text = summary.summary();
        if summary.failed > 0 {
            println!("\n{}", text.red().bold());
        } else if summary.processed == 0 {
            println!("\n{}", "No matching files found".yellow());
        } else {
            println!("\n{}", text.green().bold());
        }
    }
}

impl Report for ConsoleReporter {
    fn file_done(&mut self, outcome: FileOutcome) {
        let line = self.line(&outcome);
        if outcome.is_success() {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    }
}
