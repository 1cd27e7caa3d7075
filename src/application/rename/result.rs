//! Rename result types

use serde::Serialize;

/// A file that was (or in dry run, would be) renamed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Renamed {
    pub from: String,
    pub to: String,
}

/// A file left alone because its clean name is already taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub file: String,
    pub target: String,
}

/// Result of a rename pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    pub renamed: Vec<Renamed>,
    pub skipped: Vec<Skipped>,
}

impl RenameReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_renamed(&mut self, from: &str, to: &str) {
        self.renamed.push(Renamed {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    pub fn add_skipped(&mut self, file: &str, target: &str) {
        self.skipped.push(Skipped {
            file: file.to_string(),
            target: target.to_string(),
        });
    }

    /// True when no file needed renaming
    pub fn is_empty(&self) -> bool {
        self.renamed.is_empty()
    }
}
