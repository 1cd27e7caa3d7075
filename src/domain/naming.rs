//! Material Design icon filename matching
//!
//! Icons downloaded from Google Fonts carry their variant axes in the name:
//! `battery_full_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg`. The clean name
//! keeps only the base (`battery_full.svg`).

use regex::Regex;

use crate::error::{IconError, IconResult};

/// Default asset suffix, without the dot
pub const DEFAULT_EXTENSION: &str = "svg";

/// Compiled matcher for the Material Design naming convention.
#[derive(Debug, Clone)]
pub struct IconNamePattern {
    regex: Regex,
    extension: String,
}

impl IconNamePattern {
    /// Build the pattern for files ending in `.<extension>`.
    pub fn new(extension: &str) -> IconResult<Self> {
        validate_extension(extension)?;
        let pattern = format!(
            r"^(.+?)_\d+dp_[A-Fa-f0-9]{{6}}_FILL\d+_wght\d+_GRAD-?\d+_opsz\d+\.{}$",
            regex::escape(extension)
        );
        let regex = Regex::new(&pattern).map_err(|_| IconError::InvalidExtension {
            extension: extension.to_string(),
        })?;
        Ok(Self {
            regex,
            extension: extension.to_string(),
        })
    }

    /// Suffix this pattern was built for, without the dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Simplified name for a Material Design filename, or `None` when the
    /// name does not follow the convention.
    pub fn clean_name(&self, filename: &str) -> Option<String> {
        self.regex
            .captures(filename)
            .and_then(|caps| caps.get(1))
            .map(|base| format!("{}.{}", base.as_str(), self.extension))
    }
}

/// Reject empty suffixes and anything that is not a bare, single-segment suffix.
pub fn validate_extension(extension: &str) -> IconResult<()> {
    let ok = !extension.is_empty()
        && extension
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(IconError::InvalidExtension {
            extension: extension.to_string(),
        })
    }
}
