//! iconpack - Material Design icon normalizer for Slint projects
//!
//! Renames icons downloaded from Google Fonts
//! (`battery_full_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg`) to their base
//! name (`battery_full.svg`) and regenerates the `icons.slint` global that
//! exposes every icon as an `image` property.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CheckReport, CheckUseCase, GenerateOptions, GenerateReport, GenerateStatus, GenerateUseCase,
    RenameOptions, RenameReport, RenameUseCase, SyncReport, SyncUseCase,
};
pub use config::Config;
pub use domain::manifest::{is_slint_identifier, Manifest};
pub use domain::naming::IconNamePattern;
pub use error::{IconError, IconResult};
pub use infrastructure::LocalFs;
