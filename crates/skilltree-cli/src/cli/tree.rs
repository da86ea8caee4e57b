//! Skill tree views: a whole category, or a single skill.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use skilltree_core::level::category_level;
use skilltree_types::skill::{Category, UnlockStatus};

use crate::cli::status_label;
use crate::state::AppState;

/// Print every skill in a category, in catalog order, with its status.
pub async fn show_tree(state: &AppState, category: Category, json: bool) -> Result<()> {
    let service = &state.progress_service;
    let progress = service.load_progress(&state.profile).await?;
    let classification = service.graph().classify(category, &progress);
    let summary = category_level(&progress, category, service.xp_per_level());

    if json {
        let output = serde_json::json!({
            "profile": state.profile,
            "category": category,
            "xp": summary.xp,
            "level": summary.level,
            "skills": classification,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} tree  {}",
        style("🌳").bold(),
        style(category).cyan().bold(),
        style(format!(
            "level {} · {} XP · {}/{} unlocked",
            summary.level,
            summary.xp,
            classification.count(UnlockStatus::Unlocked),
            classification.len()
        ))
        .dim()
    );
    println!();

    if classification.is_empty() {
        println!(
            "  {} No skills defined for '{}' in the current catalog.",
            style("i").blue().bold(),
            category
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Status").fg(Color::White),
        Cell::new("Skill").fg(Color::White),
        Cell::new("ID").fg(Color::White),
        Cell::new("XP").fg(Color::White),
        Cell::new("Requires").fg(Color::White),
    ]);

    for entry in classification.iter() {
        let skill = entry.skill;
        let status_cell = match entry.status {
            UnlockStatus::Unlocked => Cell::new("● unlocked").fg(Color::Green),
            UnlockStatus::Eligible => Cell::new("○ eligible").fg(Color::Yellow),
            UnlockStatus::Locked => Cell::new("◌ locked").fg(Color::DarkGrey),
        };
        let requires = if skill.is_base() {
            "-".to_string()
        } else {
            skill.prerequisites.join(", ")
        };

        table.add_row(vec![
            status_cell,
            Cell::new(&skill.display_name),
            Cell::new(&skill.id).fg(Color::DarkGrey),
            Cell::new(skill.xp_value),
            Cell::new(requires),
        ]);
    }

    println!("{table}");
    println!();

    Ok(())
}

/// Print one skill with its prerequisites and the skills it unlocks.
pub async fn show_skill(
    state: &AppState,
    category: Category,
    skill_id: &str,
    json: bool,
) -> Result<()> {
    let service = &state.progress_service;
    let graph = service.graph();
    let skill = graph.skill(category, skill_id)?;
    let dependents = graph.dependents(category, skill_id)?;

    let progress = service.load_progress(&state.profile).await?;
    let classification = graph.classify(category, &progress);
    let status = classification.get(skill_id).unwrap_or(UnlockStatus::Locked);

    if json {
        let prerequisites: Vec<_> = skill
            .prerequisites
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "unlocked": progress.is_unlocked(category, id),
                })
            })
            .collect();
        let output = serde_json::json!({
            "category": category,
            "skill": skill,
            "status": status,
            "prerequisites": prerequisites,
            "leads_to": dependents.iter().map(|s| &s.id).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!(
        "  {}  {}",
        style(&skill.display_name).cyan().bold(),
        style(format!("({category}/{})", skill.id)).dim()
    );
    println!();
    println!("  {}  {}", style("Status:").bold(), status_label(status));
    println!("  {}      {}", style("XP:").bold(), skill.xp_value);

    if skill.is_base() {
        println!(
            "  {} {}",
            style("Requires:").bold(),
            style("nothing (base skill)").dim()
        );
    } else {
        println!("  {}", style("Requires:").bold());
        for prereq_id in &skill.prerequisites {
            let mark = if progress.is_unlocked(category, prereq_id) {
                style("✓").green()
            } else {
                style("✗").red()
            };
            let name = graph
                .skill(category, prereq_id)
                .map(|p| p.short_name().to_string())
                .unwrap_or_else(|_| prereq_id.clone());
            println!("    {mark} {name} {}", style(format!("({prereq_id})")).dim());
        }
    }

    if !dependents.is_empty() {
        println!("  {}", style("Leads to:").bold());
        for next in &dependents {
            println!(
                "    {} {} {}",
                style("→").dim(),
                next.short_name(),
                style(format!("({})", next.id)).dim()
            );
        }
    }
    println!();

    Ok(())
}
