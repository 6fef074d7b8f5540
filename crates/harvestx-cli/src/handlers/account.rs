//! Registration and profile handlers.

use anyhow::Result;
use harvestx_core::RegistrationForm;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_json, render_profile};

/// Register the calling identity.
pub async fn register(
    ctx: &CliContext,
    name: String,
    email: String,
    role: Option<String>,
) -> Result<()> {
    let form = RegistrationForm {
        display_name: name,
        email,
        role: role.unwrap_or_default(),
    };
    let profile = ctx
        .service()
        .register(&form)
        .await
        .map_err(CliError::from)?;
    if ctx.json {
        return print_json(&profile);
    }
    println!("Welcome to HarvestX! Profile created successfully.\n");
    print!("{}", render_profile(&profile));
    Ok(())
}

/// Show the calling identity's profile.
pub async fn whoami(ctx: &CliContext) -> Result<()> {
    let profile = ctx
        .service()
        .current_user()
        .await
        .map_err(CliError::from)?;
    if ctx.json {
        return print_json(&profile);
    }
    match profile {
        Some(profile) => print!("{}", render_profile(&profile)),
        None => {
            println!("This identity is not registered.");
            println!("Use 'harvestx register --name <NAME> --email <EMAIL>' to create a profile.");
        }
    }
    Ok(())
}
