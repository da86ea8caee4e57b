//! Exercise list for composing workouts.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use skilltree_core::exercise::{builtin_exercises, search_exercises};
use skilltree_types::skill::Category;

pub fn list_exercises(category: Option<Category>, search: &str, json: bool) -> Result<()> {
    let exercises = builtin_exercises();
    let found = search_exercises(&exercises, category, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        println!();
        println!("  {} No exercises match.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Exercise").fg(Color::White),
        Cell::new("ID").fg(Color::White),
        Cell::new("Category").fg(Color::White),
    ]);

    for exercise in found {
        table.add_row(vec![
            Cell::new(&exercise.name),
            Cell::new(&exercise.id).fg(Color::DarkGrey),
            Cell::new(exercise.category).fg(Color::Cyan),
        ]);
    }

    println!();
    println!("{table}");
    println!();

    Ok(())
}
