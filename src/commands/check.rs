use anyhow::{Context, Result};
use iconpack::presentation::factory;

use super::CommandContext;

/// Returns whether the icons are up to date; the caller maps `false` to exit code 1.
pub fn cmd_check(ctx: &CommandContext) -> Result<bool> {
    let report = factory::create_check_use_case(ctx.pattern.clone())
        .execute(&ctx.dir, &ctx.config.generate_options(true))
        .with_context(|| format!("failed to check icons in {}", ctx.dir.display()))?;

    print!("{}", ctx.renderer.render_check(&ctx.dir, &report));
    Ok(report.up_to_date)
}
