//! Two-phase unlock: validate, ask for confirmation, then commit.

use anyhow::Result;
use console::style;
use dialoguer::Confirm;

use skilltree_core::level::category_level;
use skilltree_core::skill::SkillGraph;
use skilltree_types::skill::{Category, CommitOutcome, UnlockAttempt};

use crate::state::AppState;

/// Unlock a skill for the active profile.
///
/// Nothing is written until the user confirms (or passes `--yes`). In JSON
/// mode without `--yes` the validation result is printed and nothing is
/// committed.
pub async fn unlock_skill(
    state: &AppState,
    category: Category,
    skill_id: &str,
    yes: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let service = &state.progress_service;
    let graph = service.graph();
    let skill = graph.skill(category, skill_id)?;

    let attempt = service
        .attempt_unlock(&state.profile, category, skill_id)
        .await?;

    let prerequisites = match attempt {
        UnlockAttempt::AlreadyUnlocked => {
            if json {
                println!("{}", serde_json::to_string_pretty(&attempt)?);
            } else if !quiet {
                println!();
                println!(
                    "  {} {} is already unlocked.",
                    style("i").blue().bold(),
                    style(&skill.display_name).cyan()
                );
                println!();
            }
            return Ok(());
        }
        UnlockAttempt::BlockedByPrerequisites(ref missing) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&attempt)?);
            } else if !quiet {
                println!();
                println!(
                    "  {} Complete these first to unlock {}:",
                    style("✗").red().bold(),
                    style(&skill.display_name).cyan()
                );
                for name in names(graph, category, missing) {
                    println!("    {} {name}", style("•").dim());
                }
                println!();
            }
            return Ok(());
        }
        UnlockAttempt::ReadyToConfirm(ref prerequisites) => prerequisites.clone(),
    };

    if !yes {
        if json {
            println!("{}", serde_json::to_string_pretty(&attempt)?);
            return Ok(());
        }

        let prompt = if prerequisites.is_empty() {
            format!("Unlock {}?", skill.display_name)
        } else {
            format!(
                "Have you completed the prerequisites: {}?",
                names(graph, category, &prerequisites).join(", ")
            )
        };
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let outcome = service
        .commit_unlock(&state.profile, category, skill_id)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        CommitOutcome::Unlocked { xp_awarded } => {
            if quiet {
                return Ok(());
            }
            let progress = service.load_progress(&state.profile).await?;
            let summary = category_level(&progress, category, service.xp_per_level());
            println!();
            println!(
                "  {} Unlocked {} {}",
                style("✓").green().bold(),
                style(&skill.display_name).cyan(),
                style(format!("(+{xp_awarded} XP)")).green()
            );
            println!(
                "  {} is now level {} with {} XP",
                style(category).bold(),
                summary.level,
                summary.xp
            );
            println!();
        }
        CommitOutcome::AlreadyUnlocked => {
            println!(
                "  {} {} was unlocked in the meantime; nothing changed.",
                style("i").blue().bold(),
                skill.display_name
            );
        }
        CommitOutcome::PrerequisitesUnmet => {
            println!(
                "  {} Prerequisites for {} are no longer met; nothing changed.",
                style("!").yellow().bold(),
                skill.display_name
            );
        }
    }

    Ok(())
}

/// Short display names for a list of skill ids, falling back to the id.
fn names(graph: &SkillGraph, category: Category, ids: &[String]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            graph
                .skill(category, id)
                .map(|s| s.short_name().to_string())
                .unwrap_or_else(|_| id.clone())
        })
        .collect()
}
