//! Run configuration
//!
//! A `StripConfig` is built from defaults, an optional JSON file and
//! command-line overrides, then handed to the walker by value.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory scanned when no root is given
pub const DEFAULT_ROOT: &str = "Juego/ProyectoFinal";

/// Suffixes for C++ source and header files
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".cpp", ".h"];

/// Configuration for one stripping run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Root of the directory tree to rewrite
    pub root: PathBuf,
    /// File name suffixes to process, e.g. `.cpp`
    pub extensions: Vec<String>,
    /// Report what would change without writing anything
    pub dry_run: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            dry_run: false,
        }
    }
}

impl StripConfig {
    /// Create a configuration for `root` with the default extensions
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: StripConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(config.normalized())
    }

    /// Replace the extension set
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self.normalized()
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check whether a file name ends with one of the configured suffixes
    pub fn matches(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }

    /// Give every extension a leading dot, drop blanks and duplicates,
    /// and fall back to the defaults when nothing is left
    pub fn normalized(mut self) -> Self {
        let mut extensions: Vec<String> = Vec::new();
        for ext in &self.extensions {
            let ext = ext.trim();
            if ext.is_empty() || ext == "." {
                continue;
            }
            let ext = if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            };
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
        if extensions.is_empty() {
            extensions = DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect();
        }
        self.extensions = extensions;
        self
    }
}
