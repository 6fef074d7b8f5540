//! Health command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{print_json, render_health};

/// Execute the health command.
///
/// Never fails: an unreachable canister is reported as `Offline`.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let status = ctx.service().health().await;
    if ctx.json {
        return print_json(&status);
    }
    println!("{}", render_health(status));
    Ok(())
}
