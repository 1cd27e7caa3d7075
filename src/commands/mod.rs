//! Command handlers
//!
//! Each handler resolves configuration, runs one use case and renders the report.

mod check;
mod sync;

pub use check::cmd_check;
pub use sync::{cmd_generate, cmd_rename, cmd_sync};

use std::path::PathBuf;

use anyhow::{Context, Result};
use iconpack::config::{self, Config};
use iconpack::domain::naming::IconNamePattern;
use iconpack::presentation::{create_renderer, OutputFormat, ReportRenderer};

use crate::cli::Cli;

/// Everything a command needs: resolved config, icon directory and renderer
pub struct CommandContext {
    pub config: Config,
    pub dir: PathBuf,
    pub pattern: IconNamePattern,
    pub renderer: Box<dyn ReportRenderer>,
}

impl CommandContext {
    /// Resolve config (CLI flag > env > file > defaults) and validate it.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read working directory")?;
        let (config, warnings) = config::load_or_default(cli.config.as_deref(), &cwd)
            .context("failed to load configuration")?;

        for w in &warnings {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            match &w.suggestion {
                Some(s) => tracing::warn!("unknown config key '{}' in {} (did you mean '{}'?)", w.key, location, s),
                None => tracing::warn!("unknown config key '{}' in {}", w.key, location),
            }
        }

        let dir = cli.dir.clone().unwrap_or_else(|| config.icons.dir.clone());
        let pattern = config.pattern()?;

        let format = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let unicode = std::env::var("TERM").map(|t| t != "dumb").unwrap_or(true);

        tracing::debug!(dir = %dir.display(), extension = pattern.extension(), "resolved icon directory");

        Ok(Self {
            config,
            dir,
            pattern,
            renderer: create_renderer(format, unicode),
        })
    }
}
