//! decomment - Common Types and Utilities
//! 
//! This crate contains the error types and run configuration shared by the
//! comment stripper, the tree walker and the command-line driver.

pub mod config;
pub mod error;

pub use config::{StripConfig, DEFAULT_EXTENSIONS, DEFAULT_ROOT};
pub use error::{ConfigError, StripError};
