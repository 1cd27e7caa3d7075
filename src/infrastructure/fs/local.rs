//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory and are persisted
/// with a rename, so a reader never sees a half-written manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| FsError::at(dir, e))? {
            let entry = entry.map_err(|e| FsError::at(dir, e))?;
            // Follows symlinks, like `Path::is_file`.
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        std::fs::rename(from, to).map_err(|e| FsError::at(from, e))
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::at(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| FsError::at(tmp.path(), e))?;
        // Temp files are created 0600; keep the manifest readable like a normal file.
        if let Some(perms) = target_permissions(path) {
            tmp.as_file()
                .set_permissions(perms)
                .map_err(|e| FsError::at(tmp.path(), e))?;
        }
        tmp.persist(path)
            .map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }
}

/// Permissions of the file being replaced, or 0644 for a new file on unix.
fn target_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(meta) = std::fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(std::fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("icons.slint");
        let fs = LocalFs::new();

        fs.write(&file, "export global Icons {\n}\n").unwrap();
        let content = fs.read(&file).unwrap();

        assert_eq!(content, "export global Icons {\n}\n");
    }

    #[test]
    fn local_fs_write_overwrites_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("icons.slint");
        let fs = LocalFs::new();

        std::fs::write(&file, "old").unwrap();
        fs.write(&file, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_write_new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let file = dir.path().join("icons.slint");

        LocalFs::new().write(&file, "x").unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn local_fs_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("ui").join("icons").join("icons.slint");
        let fs = LocalFs::new();

        fs.write(&file, "content").unwrap();

        assert!(file.exists());
    }

    #[test]
    fn local_fs_list_files_skips_directories() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.svg"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.svg")).unwrap();
        let fs = LocalFs::new();

        let files = fs.list_files(dir.path()).unwrap();

        assert_eq!(files, vec![dir.path().join("a.svg")]);
    }

    #[test]
    fn local_fs_list_missing_dir_is_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let fs = LocalFs::new();

        let err = fs.list_files(&missing).unwrap_err();

        assert!(matches!(err, FsError::NotFound(p) if p == missing));
    }

    #[test]
    fn local_fs_rename() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("long_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg");
        let to = dir.path().join("long.svg");
        std::fs::write(&from, "<svg/>").unwrap();
        let fs = LocalFs::new();

        fs.rename(&from, &to).unwrap();

        assert!(!fs.exists(&from));
        assert_eq!(fs.read(&to).unwrap(), "<svg/>");
    }
}
