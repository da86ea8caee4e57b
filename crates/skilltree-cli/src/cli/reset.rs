//! Reset progress for one category or everything.

use anyhow::Result;
use console::style;
use dialoguer::Confirm;

use skilltree_types::skill::Category;

use crate::state::AppState;

/// Reset a category, or every category when `category` is `None`.
///
/// In JSON mode nothing is reset without `--force`.
pub async fn reset_progress(
    state: &AppState,
    category: Option<Category>,
    force: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let scope = match category {
        Some(c) => format!("the {c} tree"),
        None => "all trees".to_string(),
    };

    if !force {
        if json {
            let output = serde_json::json!({
                "profile": state.profile,
                "reset": scope_key(category),
                "confirmation_required": true,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Reset {scope} for profile '{}'? This locks every skill and clears XP.",
                state.profile
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let service = &state.progress_service;
    let progress = match category {
        Some(c) => service.reset_category(&state.profile, c).await?,
        None => service.reset_all(&state.profile).await?,
    };
    tracing::info!(profile = %state.profile, scope = %scope, "Progress reset");

    if json {
        let output = serde_json::json!({
            "profile": state.profile,
            "reset": scope_key(category),
            "total_xp": progress.total_xp(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !quiet {
        println!();
        println!("  {} Reset {scope}.", style("✓").green().bold());
        println!();
    }

    Ok(())
}

fn scope_key(category: Option<Category>) -> String {
    category.map_or_else(|| "all".to_string(), |c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn state_with_pull_progress(tmp: &TempDir) -> AppState {
        let state = AppState::init_at(tmp.path().to_path_buf(), None).await.unwrap();
        state
            .progress_service
            .commit_unlock(&state.profile, Category::Pull, "deadHang")
            .await
            .unwrap();
        state
    }

    #[tokio::test]
    async fn test_json_reset_without_force_keeps_progress() {
        let tmp = TempDir::new().unwrap();
        let state = state_with_pull_progress(&tmp).await;

        reset_progress(&state, Some(Category::Pull), false, true, false)
            .await
            .unwrap();

        let progress = state.progress_service.load_progress(&state.profile).await.unwrap();
        assert!(progress.is_unlocked(Category::Pull, "deadHang"));
    }

    #[tokio::test]
    async fn test_forced_reset_all() {
        let tmp = TempDir::new().unwrap();
        let state = state_with_pull_progress(&tmp).await;

        reset_progress(&state, None, true, true, false).await.unwrap();

        let progress = state.progress_service.load_progress(&state.profile).await.unwrap();
        assert!(progress.is_empty());
    }

    #[test]
    fn test_scope_key() {
        assert_eq!(scope_key(Some(Category::Legs)), "legs");
        assert_eq!(scope_key(None), "all");
    }
}
