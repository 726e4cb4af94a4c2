//! Error handling for decomment
//! 
//! Per-file failures are recoverable and travel inside a walker outcome.
//! Configuration failures happen before any file is touched and are fatal.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failure while stripping a single file
#[derive(Error, Debug)]
pub enum StripError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StripError {
    /// Classify a read failure, splitting out invalid UTF-8 content
    pub fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            StripError::Decode {
                path: path.to_path_buf(),
            }
        } else {
            StripError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Create a write error
    pub fn write(path: &Path, source: io::Error) -> Self {
        StripError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file this error refers to
    pub fn path(&self) -> &Path {
        match self {
            StripError::Read { path, .. }
            | StripError::Decode { path }
            | StripError::Write { path, .. } => path,
        }
    }
}

/// A failure while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
