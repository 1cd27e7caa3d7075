//! Error types for iconpack
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for iconpack operations
pub type IconResult<T> = Result<T, IconError>;

/// Main error type for iconpack operations
#[derive(Error, Debug)]
pub enum IconError {
    /// Icon directory does not exist or is not a directory
    #[error("icon directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Asset extension is empty or contains a path separator / dot
    #[error("invalid icon extension '{extension}': expected a bare suffix like 'svg'")]
    InvalidExtension { extension: String },

    /// Manifest global name is not a usable Slint identifier
    #[error("invalid global name '{name}': expected a Slint identifier")]
    InvalidGlobalName { name: String },

    /// Filesystem port error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
