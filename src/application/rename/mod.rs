//! Rename Use Case
//!
//! Shortens Material Design icon filenames in place.

mod result;
mod use_case;

pub use result::{RenameReport, Renamed, Skipped};
pub use use_case::{RenameOptions, RenameUseCase};
