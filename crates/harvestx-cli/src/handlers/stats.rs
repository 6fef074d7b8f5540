//! Stats command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_json, render_stats};

/// Execute the stats command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let stats = ctx
        .service()
        .platform_stats()
        .await
        .map_err(CliError::from)?;
    if ctx.json {
        return print_json(&stats);
    }
    print!("{}", render_stats(&stats));
    Ok(())
}
