//! Per-country travel information commands

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output::{Formattable, print_cached};

/// Run the `safety` command
pub async fn safety(opts: &GlobalOptions, code: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let result = ctx.repo.get_safety_info(code).await?;
    print_cached(&result, ctx.format)
}

/// Run the `attractions` command
pub async fn attractions(opts: &GlobalOptions, code: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.repo.get_attractions(code).await?.print(ctx.format)
}

/// Run the `entry` command
pub async fn entry(opts: &GlobalOptions, code: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.repo.get_entry_requirement(code).await?.print(ctx.format)
}
