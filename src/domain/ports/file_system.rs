//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the rename and generate use cases to touch the icon
//! directory without depending on a concrete implementation (local, mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error on a known path
    Io { path: PathBuf, source: std::io::Error },
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the path the failing operation was working on.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Regular files directly inside `dir` (no recursion, no directories).
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Check if a path exists (file or directory)
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Rename `from` to `to`
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;
}

/// In-memory file system for unit tests.
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::BTreeMap<PathBuf, String>>>,
    pub dirs: std::sync::Arc<std::sync::Mutex<std::collections::BTreeSet<PathBuf>>>,
}

#[cfg(test)]
impl MockFileSystem {
    /// Mock with a single existing directory holding empty files named `names`.
    pub fn with_dir(dir: &str, names: &[&str]) -> Self {
        let fs = Self::default();
        fs.dirs.lock().unwrap().insert(PathBuf::from(dir));
        for name in names {
            fs.files
                .lock()
                .unwrap()
                .insert(Path::new(dir).join(name), String::new());
        }
        fs
    }

    pub fn file_names(&self, dir: &str) -> Vec<String> {
        self.files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(Path::new(dir)))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.dirs.lock().unwrap().contains(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        let mut files = self.files.lock().unwrap();
        let content = files
            .remove(from)
            .ok_or_else(|| FsError::NotFound(from.to_path_buf()))?;
        files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
