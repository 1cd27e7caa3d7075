//! Check Use Case
//!
//! Read-only verification for CI: reports whether a sync would change anything.

use std::path::Path;

use serde::Serialize;

use crate::domain::naming::IconNamePattern;
use crate::domain::ports::FileSystem;
use crate::error::IconResult;

use super::generate::GenerateOptions;
use super::sync::{SyncReport, SyncUseCase};

/// Result of a check
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Nothing to rename and the manifest is current
    pub up_to_date: bool,
    #[serde(flatten)]
    pub pending: SyncReport,
}

/// Check use case - dry-run sync
pub struct CheckUseCase<FS: FileSystem + Clone> {
    sync: SyncUseCase<FS>,
}

impl<FS: FileSystem + Clone> CheckUseCase<FS> {
    pub fn new(fs: FS, pattern: IconNamePattern) -> Self {
        Self {
            sync: SyncUseCase::new(fs, pattern),
        }
    }

    /// Never writes, whatever `options.dry_run` says.
    pub fn execute(&self, dir: &Path, options: &GenerateOptions) -> IconResult<CheckReport> {
        let options = options.clone().with_dry_run(true);
        let pending = self.sync.execute(dir, &options)?;
        Ok(CheckReport {
            up_to_date: !pending.has_pending_changes(),
            pending,
        })
    }
}
