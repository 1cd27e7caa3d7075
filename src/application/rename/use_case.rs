//! Rename Use Case
//!
//! Walks the icon directory and renames every file that follows the Material
//! Design naming convention to its clean name.

use std::collections::BTreeSet;
use std::path::Path;

use crate::application::listing::asset_file_names;
use crate::domain::naming::IconNamePattern;
use crate::domain::ports::FileSystem;
use crate::error::IconResult;

use super::result::RenameReport;

/// Options for the rename pass
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    /// Report what would be renamed without touching the directory
    pub dry_run: bool,
}

impl RenameOptions {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Rename use case - shortens Material Design filenames
pub struct RenameUseCase<FS: FileSystem> {
    fs: FS,
    pattern: IconNamePattern,
}

impl<FS: FileSystem> RenameUseCase<FS> {
    pub fn new(fs: FS, pattern: IconNamePattern) -> Self {
        Self { fs, pattern }
    }

    /// Rename matching files in `dir`.
    ///
    /// Files are visited in sorted order. When the clean name is already
    /// taken (by an existing entry or an earlier rename in this pass), the
    /// file is skipped and recorded in the report.
    pub fn execute(&self, dir: &Path, options: &RenameOptions) -> IconResult<RenameReport> {
        let mut report = RenameReport::new();
        // Clean names claimed during this pass; in dry run they are not on disk yet.
        let mut claimed: BTreeSet<String> = BTreeSet::new();
        // Names moved away earlier in this pass; in dry run they are still on disk.
        let mut vacated: BTreeSet<String> = BTreeSet::new();

        for name in asset_file_names(&self.fs, dir, self.pattern.extension())? {
            let Some(clean) = self.pattern.clean_name(&name) else {
                tracing::trace!(file = %name, "not a Material Design name");
                continue;
            };

            let target = dir.join(&clean);
            let on_disk = self.fs.exists(&target) && !vacated.contains(&clean);
            if claimed.contains(&clean) || on_disk {
                tracing::debug!(file = %name, target = %clean, "clean name taken, skipping");
                report.add_skipped(&name, &clean);
                continue;
            }

            if !options.dry_run {
                self.fs.rename(&dir.join(&name), &target)?;
                tracing::info!(from = %name, to = %clean, "renamed icon");
            }
            report.add_renamed(&name, &clean);
            claimed.insert(clean);
            vacated.insert(name);
        }

        Ok(report)
    }
}
