//! iconpack CLI
//!
//! Usage: iconpack [COMMAND]
//!
//! Commands:
//!   sync      Rename icons, then regenerate the manifest (default)
//!   rename    Only shorten Material Design icon filenames
//!   generate  Only regenerate the manifest
//!   check     Verify icons are up to date (CI)

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    iconpack::logging::init(cli.verbose);

    let ctx = CommandContext::from_cli(&cli)?;

    match cli.resolved_command() {
        Commands::Sync { dry_run } => commands::cmd_sync(&ctx, dry_run),
        Commands::Rename { dry_run } => commands::cmd_rename(&ctx, dry_run),
        Commands::Generate { dry_run } => commands::cmd_generate(&ctx, dry_run),
        Commands::Check => {
            if !commands::cmd_check(&ctx)? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
