//! Level overview across categories.

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

pub async fn show_levels(state: &AppState, json: bool) -> Result<()> {
    let report = state.progress_service.levels(&state.profile).await?;

    if json {
        let output = serde_json::json!({
            "profile": state.profile,
            "levels": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}  {}",
        style("🏆").bold(),
        style(format!("Overall level {}", report.overall.level)).cyan().bold(),
        style(format!("{} XP total · profile '{}'", report.overall.total_xp, state.profile)).dim()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Category").fg(Color::White),
        Cell::new("Level").fg(Color::White),
        Cell::new("XP").fg(Color::White),
        Cell::new("Next level").fg(Color::White),
    ]);

    for summary in &report.categories {
        table.add_row(vec![
            Cell::new(summary.category).fg(Color::Cyan),
            Cell::new(summary.level).set_alignment(CellAlignment::Right),
            Cell::new(summary.xp).set_alignment(CellAlignment::Right),
            Cell::new(progress_bar(summary.progress, report.xp_per_level)),
        ]);
    }

    println!("{table}");
    println!();

    Ok(())
}

/// Text bar of XP toward the next level, e.g. `[####------] 4/10`.
fn progress_bar(progress: u32, xp_per_level: u32) -> String {
    const WIDTH: u64 = 10;
    let per_level = xp_per_level.max(1);
    let filled = u64::from(progress.min(per_level)) * WIDTH / u64::from(per_level);
    let filled = filled as usize;
    format!(
        "[{}{}] {progress}/{per_level}",
        "#".repeat(filled),
        "-".repeat(WIDTH as usize - filled)
    )
}
