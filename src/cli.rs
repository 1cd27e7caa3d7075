//! CLI Argument Parsing
//!
//! Global flags (--dir, --config, --json, --verbose) are inherited by all subcommands.
//! Running without a subcommand performs a full `sync`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// iconpack - normalize Material Design icon names and regenerate icons.slint
#[derive(Parser, Debug)]
#[command(name = "iconpack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'iconpack' without arguments to rename icons and regenerate the manifest.")]
pub struct Cli {
    /// Icon directory (overrides config and ICONPACK_DIR)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Config file (default: ./iconpack.toml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rename icons, then regenerate the manifest
    Sync {
        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Only shorten Material Design icon filenames
    Rename {
        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Only regenerate the manifest
    Generate {
        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify nothing needs renaming and the manifest is current (exits non-zero otherwise)
    Check,
}

impl Cli {
    /// The subcommand to run; no subcommand means `sync`.
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Sync { dry_run: false })
    }
}
