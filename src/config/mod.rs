//! Configuration module for iconpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ICONPACK_*)
//! 3. Project config (iconpack.toml in the working directory, or --config)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning,
    CONFIG_FILE_NAME,
};
pub use types::{Config, IconsConfig, ManifestConfig};
