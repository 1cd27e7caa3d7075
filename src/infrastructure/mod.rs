//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! - `fs/` - File system implementations (Local)

pub mod fs;

pub use fs::LocalFs;
