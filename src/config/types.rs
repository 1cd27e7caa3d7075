//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::application::GenerateOptions;
use crate::domain::manifest::{default_header, DEFAULT_GLOBAL_NAME, DEFAULT_MANIFEST_FILE};
use crate::domain::naming::{IconNamePattern, DEFAULT_EXTENSION};
use crate::error::IconResult;

/// Default icon directory, relative to the working directory
pub const DEFAULT_ICONS_DIR: &str = "material-1.0/ui/icons";

/// Where the icons live and which files count as icons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconsConfig {
    #[serde(default = "default_icons_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            dir: default_icons_dir(),
            extension: default_extension(),
        }
    }
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ICONS_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Generated manifest settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Manifest path, relative to `icons.dir` unless absolute
    #[serde(default = "default_manifest_file")]
    pub file: PathBuf,

    /// Name of the exported Slint global
    #[serde(default = "default_global")]
    pub global: String,

    #[serde(default = "default_header")]
    pub header: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file: default_manifest_file(),
            global: default_global(),
            header: default_header(),
        }
    }
}

fn default_manifest_file() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_FILE)
}

fn default_global() -> String {
    DEFAULT_GLOBAL_NAME.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub icons: IconsConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

impl Config {
    /// Name matcher for the configured extension
    pub fn pattern(&self) -> IconResult<IconNamePattern> {
        IconNamePattern::new(&self.icons.extension)
    }

    /// Manifest options for the generate step
    pub fn generate_options(&self, dry_run: bool) -> GenerateOptions {
        GenerateOptions {
            manifest_file: self.manifest.file.clone(),
            global_name: self.manifest.global.clone(),
            header: self.manifest.header.clone(),
            dry_run,
        }
    }
}
