use anyhow::{Context, Result};
use iconpack::application::RenameOptions;
use iconpack::presentation::factory;

use super::CommandContext;

pub fn cmd_sync(ctx: &CommandContext, dry_run: bool) -> Result<()> {
    let report = factory::create_sync_use_case(ctx.pattern.clone())
        .execute(&ctx.dir, &ctx.config.generate_options(dry_run))
        .with_context(|| format!("failed to sync icons in {}", ctx.dir.display()))?;

    print!("{}", ctx.renderer.render_sync(&ctx.dir, &report, dry_run));
    Ok(())
}

pub fn cmd_rename(ctx: &CommandContext, dry_run: bool) -> Result<()> {
    let report = factory::create_rename_use_case(ctx.pattern.clone())
        .execute(&ctx.dir, &RenameOptions::default().with_dry_run(dry_run))
        .with_context(|| format!("failed to rename icons in {}", ctx.dir.display()))?;

    print!("{}", ctx.renderer.render_rename(&ctx.dir, &report, dry_run));
    Ok(())
}

pub fn cmd_generate(ctx: &CommandContext, dry_run: bool) -> Result<()> {
    let report = factory::create_generate_use_case(&ctx.pattern)
        .execute(&ctx.dir, &ctx.config.generate_options(dry_run))
        .with_context(|| format!("failed to generate manifest for {}", ctx.dir.display()))?;

    print!("{}", ctx.renderer.render_generate(&report));
    Ok(())
}
