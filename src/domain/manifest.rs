//! Slint icon manifest
//!
//! Renders the `export global` that exposes every icon as an image property:
//!
//! ```text
//! export global Icons {
//!     out property <image> battery_full: @image-url("battery_full.svg");
//! }
//! ```

use crate::error::{IconError, IconResult};

/// Default manifest file name, relative to the icon directory
pub const DEFAULT_MANIFEST_FILE: &str = "icons.slint";

/// Default name of the exported global
pub const DEFAULT_GLOBAL_NAME: &str = "Icons";

/// Header lines written above the global
pub fn default_header() -> Vec<String> {
    vec![
        "// Copyright © SixtyFPS GmbH <info@slint.dev>".to_string(),
        "// SPDX-License-Identifier: MIT".to_string(),
    ]
}

/// In-memory manifest: header, global name, and the sorted asset base names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    global_name: String,
    extension: String,
    header: Vec<String>,
    assets: Vec<String>,
}

impl Manifest {
    /// Build a manifest; `assets` are base names without suffix and are sorted here.
    pub fn new(
        global_name: &str,
        extension: &str,
        header: Vec<String>,
        mut assets: Vec<String>,
    ) -> IconResult<Self> {
        if !is_slint_identifier(global_name) {
            return Err(IconError::InvalidGlobalName {
                name: global_name.to_string(),
            });
        }
        assets.sort();
        assets.dedup();
        Ok(Self {
            global_name: global_name.to_string(),
            extension: extension.to_string(),
            header,
            assets,
        })
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Asset names Slint will not accept as property names.
    pub fn invalid_identifiers(&self) -> impl Iterator<Item = &str> {
        self.assets
            .iter()
            .map(String::as_str)
            .filter(|name| !is_slint_identifier(name))
    }

    /// Render the `.slint` source, `\n`-separated with one trailing newline.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.header.len() + self.assets.len() + 4);
        if !self.header.is_empty() {
            lines.extend(self.header.iter().cloned());
            lines.push(String::new());
        }
        lines.push(format!("export global {} {{", self.global_name));
        for name in &self.assets {
            lines.push(format!(
                "    out property <image> {name}: @image-url(\"{name}.{ext}\");",
                ext = self.extension
            ));
        }
        lines.push("}".to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Slint identifiers start with a letter or `_` and continue with
/// alphanumerics, `_` or `-`.
pub fn is_slint_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
