//! Generate options

use std::path::PathBuf;

use crate::domain::manifest::{default_header, DEFAULT_GLOBAL_NAME, DEFAULT_MANIFEST_FILE};

/// Options for regenerating the manifest
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Manifest path; relative paths are resolved against the icon directory
    pub manifest_file: PathBuf,
    /// Name of the exported Slint global
    pub global_name: String,
    /// Comment lines written above the global
    pub header: Vec<String>,
    /// Report without writing
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            manifest_file: PathBuf::from(DEFAULT_MANIFEST_FILE),
            global_name: DEFAULT_GLOBAL_NAME.to_string(),
            header: default_header(),
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
