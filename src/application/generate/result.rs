//! Generate result types

use std::path::PathBuf;

use serde::Serialize;

/// What happened to the manifest file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerateStatus {
    /// New content was written
    Written,
    /// Existing file already had the same content
    Unchanged,
    /// Dry run: content differs and would be written
    WouldWrite,
}

/// Result of regenerating the manifest
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub icon_count: usize,
    pub status: GenerateStatus,
    /// Asset names that are not valid Slint identifiers
    pub invalid_identifiers: Vec<String>,
    /// Manifest content before this run, if the file existed
    #[serde(skip)]
    pub previous: Option<String>,
    /// Rendered manifest content
    #[serde(skip)]
    pub rendered: String,
}

impl GenerateReport {
    /// True when the file on disk differs (or would differ) from the rendered content
    pub fn is_stale(&self) -> bool {
        self.status != GenerateStatus::Unchanged
    }
}
