//! Output Rendering
//!
//! Renders use case reports as human-readable text or JSON.

use std::path::Path;

use similar::TextDiff;

use crate::application::{CheckReport, GenerateReport, GenerateStatus, RenameReport, SyncReport};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    arrow: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            arrow: "→",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            arrow: "->",
            warn: "[!]",
        }
    }
}

/// Renders reports to a string; the caller decides where it goes.
pub trait ReportRenderer {
    fn render_rename(&self, dir: &Path, report: &RenameReport, dry_run: bool) -> String;
    fn render_generate(&self, report: &GenerateReport) -> String;
    fn render_sync(&self, dir: &Path, report: &SyncReport, dry_run: bool) -> String;
    fn render_check(&self, dir: &Path, report: &CheckReport) -> String;
}

/// Text renderer
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use unicode symbols
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { unicode: true }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn rename_section(&self, out: &mut String, report: &RenameReport, dry_run: bool) {
        let icons = self.icons();
        let verb = if dry_run { "Would rename" } else { "Renamed" };
        out.push_str("=== Renaming icons ===\n");
        for renamed in &report.renamed {
            out.push_str(&format!(
                "  {} {}: {} {} {}\n",
                icons.check, verb, renamed.from, icons.arrow, renamed.to
            ));
        }
        for skipped in &report.skipped {
            out.push_str(&format!(
                "  {} Warning: {} already exists, skipping {}\n",
                icons.warn, skipped.target, skipped.file
            ));
        }
        if report.renamed.is_empty() {
            out.push_str("  No icons needed renaming\n");
        }
    }

    fn generate_section(&self, out: &mut String, report: &GenerateReport) {
        let icons = self.icons();
        let file_name = report
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| report.path.display().to_string());
        out.push_str(&format!("=== Regenerating {} ===\n", file_name));
        for name in &report.invalid_identifiers {
            out.push_str(&format!(
                "  {} Warning: '{}' is not a valid Slint identifier\n",
                icons.warn, name
            ));
        }
        let line = match report.status {
            GenerateStatus::Written => format!(
                "  {} Generated {} with {} icons\n",
                icons.check,
                report.path.display(),
                report.icon_count
            ),
            GenerateStatus::Unchanged => format!(
                "  {} {} is up to date ({} icons)\n",
                icons.check,
                report.path.display(),
                report.icon_count
            ),
            GenerateStatus::WouldWrite => format!(
                "  {} Would generate {} with {} icons\n",
                icons.arrow,
                report.path.display(),
                report.icon_count
            ),
        };
        out.push_str(&line);
    }
}

impl ReportRenderer for TextRenderer {
    fn render_rename(&self, dir: &Path, report: &RenameReport, dry_run: bool) -> String {
        let mut out = format!("Icons directory: {}\n\n", dir.display());
        self.rename_section(&mut out, report, dry_run);
        out
    }

    fn render_generate(&self, report: &GenerateReport) -> String {
        let mut out = String::new();
        self.generate_section(&mut out, report);
        out
    }

    fn render_sync(&self, dir: &Path, report: &SyncReport, dry_run: bool) -> String {
        let mut out = format!("Icons directory: {}\n\n", dir.display());
        self.rename_section(&mut out, &report.rename, dry_run);
        out.push('\n');
        self.generate_section(&mut out, &report.generate);
        out
    }

    fn render_check(&self, dir: &Path, report: &CheckReport) -> String {
        let icons = self.icons();
        let pending = &report.pending;
        let mut out = format!("Icons directory: {}\n\n", dir.display());

        if report.up_to_date {
            out.push_str(&format!(
                "{} Icons are up to date ({} icons)\n",
                icons.check, pending.generate.icon_count
            ));
        } else {
            out.push_str(&format!("{} Icons are out of date\n", icons.cross));
        }

        if !pending.rename.renamed.is_empty() {
            out.push('\n');
            out.push_str(&format!(
                "  Pending renames ({}):\n",
                pending.rename.renamed.len()
            ));
            for renamed in &pending.rename.renamed {
                out.push_str(&format!(
                    "    {} {} {}\n",
                    renamed.from, icons.arrow, renamed.to
                ));
            }
        }

        if !pending.rename.skipped.is_empty() {
            out.push('\n');
            out.push_str(&format!(
                "  Warnings ({}):\n",
                pending.rename.skipped.len()
            ));
            for skipped in &pending.rename.skipped {
                out.push_str(&format!(
                    "    {} {} already exists, skipping {}\n",
                    icons.warn, skipped.target, skipped.file
                ));
            }
        }

        if pending.generate.is_stale() {
            out.push('\n');
            out.push_str(&manifest_diff(&pending.generate));
        }

        out
    }
}

/// Unified diff between the manifest on disk and the rendered one.
pub fn manifest_diff(report: &GenerateReport) -> String {
    let path = report.path.display().to_string();
    let old = report.previous.as_deref().unwrap_or("");
    TextDiff::from_lines(old, report.rendered.as_str())
        .unified_diff()
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string()
}

/// JSON renderer
pub struct JsonRenderer;

impl JsonRenderer {
    fn to_json(value: serde_json::Value) -> String {
        let mut s = serde_json::to_string_pretty(&value).unwrap_or_default();
        s.push('\n');
        s
    }
}

impl ReportRenderer for JsonRenderer {
    fn render_rename(&self, dir: &Path, report: &RenameReport, dry_run: bool) -> String {
        Self::to_json(serde_json::json!({
            "command": "rename",
            "dir": dir.display().to_string(),
            "dry_run": dry_run,
            "rename": report,
        }))
    }

    fn render_generate(&self, report: &GenerateReport) -> String {
        Self::to_json(serde_json::json!({
            "command": "generate",
            "generate": report,
        }))
    }

    fn render_sync(&self, dir: &Path, report: &SyncReport, dry_run: bool) -> String {
        Self::to_json(serde_json::json!({
            "command": "sync",
            "dir": dir.display().to_string(),
            "dry_run": dry_run,
            "rename": report.rename,
            "generate": report.generate,
        }))
    }

    fn render_check(&self, dir: &Path, report: &CheckReport) -> String {
        Self::to_json(serde_json::json!({
            "command": "check",
            "dir": dir.display().to_string(),
            "up_to_date": report.up_to_date,
            "rename": report.pending.rename,
            "generate": report.pending.generate,
        }))
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
