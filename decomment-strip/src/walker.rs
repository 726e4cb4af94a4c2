//! Recursive source tree rewriting
//!
//! Files are visited one at a time in sorted order. A failure on one file
//! is captured in its outcome and never stops the walk.

use crate::outcome::{FileOutcome, FileStatus, Report, RunSummary};
use crate::stripper::strip;
use decomment_common::{StripConfig, StripError};
use log::{debug, trace, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Walks a directory tree and strips every matching file
pub struct Walker {
    config: StripConfig,
}

impl Walker {
    pub fn new(config: StripConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Process every matching file under the configured root, handing each
    /// outcome to `reporter` as soon as it is known.
    pub fn run(&self, reporter: &mut dyn Report) -> RunSummary {
        let mut summary = RunSummary::default();
        debug!(
            "Scanning {} for {:?}{}",
            self.config.root.display(),
            self.config.extensions,
            if self.config.dry_run { " (dry run)" } else { "" }
        );
        self.walk_dir(&self.config.root, reporter, &mut summary);
        debug!("{}", summary.summary());
        summary
    }

    fn walk_dir(&self, dir: &Path, reporter: &mut dyn Report, summary: &mut RunSummary) {
        let entries = match sorted_entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Skipping directory {}: {}", dir.display(), e);
                return;
            }
        };

        for (path, is_dir) in entries {
            if is_dir {
                self.walk_dir(&path, reporter, summary);
                continue;
            }

            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| self.config.matches(name));
            if !matches {
                trace!("Ignoring {}", path.display());
                continue;
            }

            let outcome = self.process_file(&path);
            summary.add(&outcome);
            reporter.file_done(outcome);
        }
    }

    /// Strip a single file in place (or just compare, in dry-run mode)
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        debug!("Processing {}", path.display());
        let result = rewrite(path, self.config.dry_run);
        FileOutcome::new(path.to_path_buf(), result)
    }
}

fn rewrite(path: &Path, dry_run: bool) -> Result<FileStatus, StripError> {
    let content = fs::read_to_string(path).map_err(|e| StripError::read(path, e))?;
    let stripped = strip(&content);
    trace!(
        "{}: {} lines in, {} lines out",
        path.display(),
        content.split('\n').count(),
        stripped.split('\n').count()
    );

    let changed = stripped != content;
    if dry_run {
        return Ok(if changed {
            FileStatus::WouldRewrite
        } else {
            FileStatus::Unchanged
        });
    }

    fs::write(path, stripped).map_err(|e| StripError::write(path, e))?;
    Ok(if changed {
        FileStatus::Rewritten
    } else {
        FileStatus::Unchanged
    })
}

/// List a directory as `(path, is_dir)` pairs sorted by name. Symlinked
/// directories are left out so the walk never follows them.
fn sorted_entries(dir: &Path) -> std::io::Result<Vec<(PathBuf, bool)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_symlink() && path.is_dir() {
            trace!("Not following symlinked directory {}", path.display());
            continue;
        }
        entries.push((path, file_type.is_dir()));
    }
    entries.sort();
    Ok(entries)
}
