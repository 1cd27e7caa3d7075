//! Sync Use Case
//!
//! One full pass over the icon directory: rename, then regenerate the manifest.

use std::path::Path;

use serde::Serialize;

use crate::domain::naming::IconNamePattern;
use crate::domain::ports::FileSystem;
use crate::error::IconResult;

use super::generate::{GenerateOptions, GenerateReport, GenerateUseCase};
use super::listing::asset_file_names;
use super::rename::{RenameOptions, RenameReport, RenameUseCase};

/// Result of a full sync pass
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub rename: RenameReport,
    pub generate: GenerateReport,
}

impl SyncReport {
    /// True when a real run would change something on disk
    pub fn has_pending_changes(&self) -> bool {
        !self.rename.renamed.is_empty() || self.generate.is_stale()
    }
}

/// Sync use case - rename followed by regenerate
pub struct SyncUseCase<FS: FileSystem + Clone> {
    fs: FS,
    pattern: IconNamePattern,
}

impl<FS: FileSystem + Clone> SyncUseCase<FS> {
    pub fn new(fs: FS, pattern: IconNamePattern) -> Self {
        Self { fs, pattern }
    }

    /// Run both steps. In dry run, the manifest is rendered against the
    /// names the directory would hold after the planned renames.
    pub fn execute(&self, dir: &Path, options: &GenerateOptions) -> IconResult<SyncReport> {
        let rename = RenameUseCase::new(self.fs.clone(), self.pattern.clone())
            .execute(dir, &RenameOptions::default().with_dry_run(options.dry_run))?;

        let generator = GenerateUseCase::new(self.fs.clone(), self.pattern.extension());
        let generate = if options.dry_run {
            let mut names = asset_file_names(&self.fs, dir, self.pattern.extension())?;
            for renamed in &rename.renamed {
                names.retain(|name| name != &renamed.from);
                names.push(renamed.to.clone());
            }
            generator.execute_for(dir, &names, options)?
        } else {
            generator.execute(dir, options)?
        };

        Ok(SyncReport { rename, generate })
    }
}
