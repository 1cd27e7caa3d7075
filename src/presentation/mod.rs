//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! CLI argument parsing lives in `crate::cli`.

pub mod factory;
pub mod output;

pub use output::{create_renderer, OutputFormat, ReportRenderer};
