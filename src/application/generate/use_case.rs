//! Generate Use Case
//!
//! Lists the icon files, renders `icons.slint` and writes it when the content changed.

use std::path::{Path, PathBuf};

use crate::application::listing::{asset_file_names, asset_stem};
use crate::domain::manifest::Manifest;
use crate::domain::ports::{FileSystem, FsError};
use crate::error::IconResult;

use super::options::GenerateOptions;
use super::result::{GenerateReport, GenerateStatus};

/// Generate use case - regenerates the Slint manifest
pub struct GenerateUseCase<FS: FileSystem> {
    fs: FS,
    extension: String,
}

impl<FS: FileSystem> GenerateUseCase<FS> {
    pub fn new(fs: FS, extension: &str) -> Self {
        Self {
            fs,
            extension: extension.to_string(),
        }
    }

    /// Regenerate the manifest from the files currently in `dir`.
    pub fn execute(&self, dir: &Path, options: &GenerateOptions) -> IconResult<GenerateReport> {
        let names = asset_file_names(&self.fs, dir, &self.extension)?;
        self.execute_for(dir, &names, options)
    }

    /// Regenerate the manifest for an explicit set of asset file names.
    ///
    /// Used by dry-run sync, where the directory does not reflect the planned renames yet.
    pub fn execute_for(
        &self,
        dir: &Path,
        file_names: &[String],
        options: &GenerateOptions,
    ) -> IconResult<GenerateReport> {
        let stems = file_names
            .iter()
            .map(|name| asset_stem(name, &self.extension).to_string())
            .collect();
        let manifest = Manifest::new(
            &options.global_name,
            &self.extension,
            options.header.clone(),
            stems,
        )?;

        let invalid_identifiers: Vec<String> =
            manifest.invalid_identifiers().map(str::to_string).collect();
        for name in &invalid_identifiers {
            tracing::warn!(icon = %name, "icon name is not a valid Slint identifier");
        }

        let path = self.manifest_path(dir, &options.manifest_file);
        let rendered = manifest.render();
        let previous = match self.fs.read(&path) {
            Ok(content) => Some(content),
            Err(FsError::NotFound(_)) => None,
            Err(e) => return Err(e.into()),
        };

        let status = if previous.as_deref() == Some(rendered.as_str()) {
            GenerateStatus::Unchanged
        } else if options.dry_run {
            GenerateStatus::WouldWrite
        } else {
            self.fs.write(&path, &rendered)?;
            tracing::info!(path = %path.display(), icons = manifest.assets().len(), "wrote manifest");
            GenerateStatus::Written
        };

        Ok(GenerateReport {
            path,
            icon_count: manifest.assets().len(),
            status,
            invalid_identifiers,
            previous,
            rendered,
        })
    }

    fn manifest_path(&self, dir: &Path, manifest_file: &Path) -> PathBuf {
        if manifest_file.is_absolute() {
            manifest_file.to_path_buf()
        } else {
            dir.join(manifest_file)
        }
    }
}
