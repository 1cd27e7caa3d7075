//! Generate Use Case
//!
//! Regenerates the Slint icon manifest from the icon directory.

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::{GenerateReport, GenerateStatus};
pub use use_case::GenerateUseCase;
