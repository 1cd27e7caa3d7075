//! Common test utilities for iconpack CLI tests.
//!
//! - `TestEnv`: isolated project directory with an icon directory
//! - Fixtures: Material Design filenames

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
