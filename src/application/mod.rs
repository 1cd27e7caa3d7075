//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (naming, manifest, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RenameUseCase` - Shortens Material Design filenames
//! - `GenerateUseCase` - Regenerates the Slint manifest
//! - `SyncUseCase` - Rename then regenerate
//! - `CheckUseCase` - Dry-run sync for CI

pub mod check;
pub mod generate;
pub mod listing;
pub mod rename;
pub mod sync;

pub use check::{CheckReport, CheckUseCase};
pub use generate::{GenerateOptions, GenerateReport, GenerateStatus, GenerateUseCase};
pub use rename::{RenameOptions, RenameReport, RenameUseCase, Renamed, Skipped};
pub use sync::{SyncReport, SyncUseCase};
