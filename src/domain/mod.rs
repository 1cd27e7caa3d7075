//! Domain Layer
//!
//! Pure rules without I/O: the Material Design naming pattern, the Slint
//! manifest format, and the filesystem port the application layer talks to.
//!
//! - `naming` - Material Design filename matcher
//! - `manifest` - `icons.slint` rendering
//! - `ports/` - Interface definitions for infrastructure

pub mod manifest;
pub mod naming;
pub mod ports;
