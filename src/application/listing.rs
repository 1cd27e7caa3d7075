//! Icon directory listing shared by rename and generate

use std::ffi::OsStr;
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::error::{IconError, IconResult};

/// Names of the regular files directly in `dir` whose suffix is exactly
/// `.<extension>`, sorted by code point.
///
/// Names that are not valid UTF-8 cannot appear in a manifest and are skipped.
pub fn asset_file_names<FS: FileSystem>(
    fs: &FS,
    dir: &Path,
    extension: &str,
) -> IconResult<Vec<String>> {
    if !fs.is_dir(dir) {
        return Err(IconError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for path in fs.list_files(dir)? {
        if path.extension() != Some(OsStr::new(extension)) {
            continue;
        }
        match path.file_name().and_then(OsStr::to_str) {
            Some(name) => names.push(name.to_string()),
            None => tracing::debug!(path = %path.display(), "skipping non UTF-8 file name"),
        }
    }
    names.sort();
    Ok(names)
}

/// Base name of an asset file (`battery_full.svg` -> `battery_full`).
pub fn asset_stem<'a>(name: &'a str, extension: &str) -> &'a str {
    name.strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::file_system::MockFileSystem;

    #[test]
    fn lists_only_matching_suffix_sorted() {
        let fs = MockFileSystem::with_dir(
            "icons",
            &["wifi.svg", "icons.slint", "README.md", "battery.svg", "logo.SVG"],
        );

        let names = asset_file_names(&fs, Path::new("icons"), "svg").unwrap();

        assert_eq!(names, vec!["battery.svg", "wifi.svg"]);
    }

    #[test]
    fn hidden_suffix_only_file_is_not_an_asset() {
        let fs = MockFileSystem::with_dir("icons", &[".svg", "a.svg"]);

        let names = asset_file_names(&fs, Path::new("icons"), "svg").unwrap();

        assert_eq!(names, vec!["a.svg"]);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let fs = MockFileSystem::default();

        let err = asset_file_names(&fs, Path::new("nope"), "svg").unwrap_err();

        assert!(matches!(err, IconError::DirectoryNotFound { .. }));
    }

    #[test]
    fn stem_strips_suffix() {
        assert_eq!(asset_stem("battery_full.svg", "svg"), "battery_full");
        assert_eq!(asset_stem("a.b.svg", "svg"), "a.b");
    }
}
