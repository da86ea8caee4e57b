//! Local profile management.

use anyhow::{Result, bail};
use clap::Subcommand;
use console::style;
use dialoguer::Confirm;

use skilltree_infra::filesystem::progress_path;

use crate::state::AppState;

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// List profiles with saved progress.
    #[command(alias = "ls")]
    List,

    /// Delete a profile and all of its progress.
    #[command(alias = "rm")]
    Delete {
        name: String,

        /// Skip confirmation prompt.
        #[arg(long, short)]
        force: bool,
    },
}

pub async fn handle_profile_command(
    cmd: ProfileCommand,
    state: &AppState,
    json: bool,
    quiet: bool,
) -> Result<()> {
    match cmd {
        ProfileCommand::List => list_profiles(state, json).await,
        ProfileCommand::Delete { name, force } => {
            delete_profile(state, &name, force, json, quiet).await
        }
    }
}

async fn list_profiles(state: &AppState, json: bool) -> Result<()> {
    let profiles = state.progress_service.profiles().await?;

    if json {
        let output = serde_json::json!({
            "active": state.profile,
            "default": state.config.default_profile,
            "profiles": profiles,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    if profiles.is_empty() {
        println!(
            "  {} No saved progress yet. Unlock a skill with: {}",
            style("i").blue().bold(),
            style("sktree unlock pull deadHang").yellow()
        );
    } else {
        for name in &profiles {
            let marker = if *name == state.profile {
                style("●").green()
            } else {
                style("○").dim()
            };
            println!("  {marker} {name}");
        }
    }
    println!();
    println!(
        "  Stored in {}",
        style(progress_path(&state.data_dir).display()).dim()
    );
    println!();

    Ok(())
}

async fn delete_profile(
    state: &AppState,
    name: &str,
    force: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all progress for profile '{name}'?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    if !state.progress_service.delete_profile(name).await? {
        bail!("profile '{name}' has no saved progress");
    }

    if json {
        println!("{}", serde_json::json!({ "deleted": name }));
    } else if !quiet {
        println!("  {} Deleted profile '{name}'", style("✓").green().bold());
    }

    Ok(())
}
