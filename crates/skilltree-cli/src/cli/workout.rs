//! Workout log subcommands: save, list, show, delete.

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::{Confirm, Input, MultiSelect};

use skilltree_core::exercise::builtin_exercises;
use skilltree_types::workout::{Exercise, Workout, WorkoutExercise, WorkoutId, WorkoutSet};

use crate::state::AppState;

/// Workout subcommands.
#[derive(Subcommand)]
pub enum WorkoutCommand {
    /// Save a named workout.
    ///
    /// Exercises are given as `ID[:REPS,REPS,...]`, e.g. `-e pullups:8,6`.
    /// Without `-e`, exercises are picked interactively.
    Save {
        /// Workout name.
        name: String,

        /// Exercise entry (repeatable).
        #[arg(long = "exercise", short = 'e', value_name = "ID[:REPS,...]")]
        exercises: Vec<String>,

        /// Mark every exercise as followed by a rest period.
        #[arg(long)]
        rest: bool,

        /// Notes attached to every exercise.
        #[arg(long)]
        notes: Option<String>,
    },

    /// List saved workouts.
    #[command(alias = "ls")]
    List,

    /// Show a saved workout.
    Show {
        /// Workout ID.
        id: String,
    },

    /// Delete a saved workout.
    #[command(alias = "rm")]
    Delete {
        /// Workout ID.
        id: String,

        /// Skip confirmation prompt.
        #[arg(long, short)]
        force: bool,
    },
}

/// Handle a workout subcommand.
pub async fn handle_workout_command(
    cmd: WorkoutCommand,
    state: &AppState,
    json: bool,
    quiet: bool,
) -> Result<()> {
    match cmd {
        WorkoutCommand::Save {
            name,
            exercises,
            rest,
            notes,
        } => save_workout(state, &name, &exercises, rest, notes, json, quiet).await,
        WorkoutCommand::List => list_workouts(state, json).await,
        WorkoutCommand::Show { id } => show_workout(state, &id, json).await,
        WorkoutCommand::Delete { id, force } => delete_workout(state, &id, force, json, quiet).await,
    }
}

async fn save_workout(
    state: &AppState,
    name: &str,
    entries: &[String],
    rest: bool,
    notes: Option<String>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let available = builtin_exercises();

    let mut exercises = if entries.is_empty() {
        pick_exercises(&available)?
    } else {
        entries
            .iter()
            .map(|entry| parse_entry(entry, &available))
            .collect::<Result<Vec<_>>>()?
    };

    if exercises.is_empty() {
        bail!("a workout needs at least one exercise");
    }

    for exercise in &mut exercises {
        exercise.rest = rest;
        if let Some(notes) = &notes {
            exercise.notes = notes.clone();
        }
    }

    let workout = state.workout_service.save_workout(name, exercises).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&workout)?);
        return Ok(());
    }

    if !quiet {
        println!();
        println!(
            "  {} Saved workout {} {}",
            style("✓").green().bold(),
            style(&workout.name).cyan(),
            style(format!("({})", workout.id)).dim()
        );
        println!();
    }

    Ok(())
}

/// Interactive exercise picker with per-exercise reps.
fn pick_exercises(available: &[Exercise]) -> Result<Vec<WorkoutExercise>> {
    let labels: Vec<String> = available
        .iter()
        .map(|e| format!("{} ({})", e.name, e.category))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Select exercises (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    picked
        .into_iter()
        .map(|index| -> Result<WorkoutExercise> {
            let exercise = &available[index];
            let reps = Input::<String>::new()
                .with_prompt(format!("Reps per set for {} (e.g. 8,6; blank to skip)", exercise.name))
                .allow_empty(true)
                .interact_text()?;

            let mut entry = WorkoutExercise::from_exercise(exercise);
            entry.sets = parse_reps(&reps)?;
            Ok(entry)
        })
        .collect()
}

/// Parse `ID[:REPS,REPS,...]` against the exercise list.
fn parse_entry(entry: &str, available: &[Exercise]) -> Result<WorkoutExercise> {
    let (id, reps) = entry.split_once(':').unwrap_or((entry, ""));
    let id = id.trim();

    let exercise = available
        .iter()
        .find(|e| e.id.eq_ignore_ascii_case(id))
        .with_context(|| {
            let known: Vec<&str> = available.iter().map(|e| e.id.as_str()).collect();
            format!("unknown exercise '{id}' (known: {})", known.join(", "))
        })?;

    let mut workout_exercise = WorkoutExercise::from_exercise(exercise);
    workout_exercise.sets = parse_reps(reps)?;
    Ok(workout_exercise)
}

/// Parse comma-separated reps. Blank input gives one empty set.
fn parse_reps(reps: &str) -> Result<Vec<WorkoutSet>> {
    let reps = reps.trim();
    if reps.is_empty() {
        return Ok(vec![WorkoutSet::default()]);
    }

    reps.split(',')
        .map(|r| -> Result<WorkoutSet> {
            let r = r.trim();
            let count = r
                .parse::<u32>()
                .with_context(|| format!("invalid rep count '{r}'"))?;
            Ok(WorkoutSet { reps: Some(count) })
        })
        .collect()
}

async fn list_workouts(state: &AppState, json: bool) -> Result<()> {
    let workouts = state.workout_service.list_workouts().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&workouts)?);
        return Ok(());
    }

    if workouts.is_empty() {
        println!();
        println!(
            "  {} No saved workouts. Save one with: {}",
            style("i").blue().bold(),
            style("sktree workout save <name> -e pullups:8,6").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Exercises").fg(Color::White),
        Cell::new("Total reps").fg(Color::White),
        Cell::new("Created").fg(Color::White),
        Cell::new("ID").fg(Color::White),
    ]);

    for workout in &workouts {
        table.add_row(vec![
            Cell::new(&workout.name).fg(Color::Cyan),
            Cell::new(workout.exercises.len()).set_alignment(CellAlignment::Right),
            Cell::new(total_reps(workout)).set_alignment(CellAlignment::Right),
            Cell::new(workout.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(workout.id).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();

    Ok(())
}

async fn show_workout(state: &AppState, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let workout = state.workout_service.get_workout(&id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&workout)?);
        return Ok(());
    }

    println!();
    println!(
        "  {}  {}",
        style(&workout.name).cyan().bold(),
        style(workout.created_at.format("%Y-%m-%d %H:%M")).dim()
    );
    println!();

    for exercise in &workout.exercises {
        let sets: Vec<String> = exercise
            .sets
            .iter()
            .map(|s| s.reps.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()))
            .collect();
        println!(
            "  {} {} {}  sets: {}",
            style("•").dim(),
            exercise.name,
            style(format!("({})", exercise.category)).dim(),
            sets.join(" / ")
        );
        if !exercise.notes.is_empty() {
            println!("      {}", style(&exercise.notes).italic());
        }
        if exercise.rest {
            println!("      {}", style("rest").yellow());
        }
    }
    println!();
    println!("  {} {}", style("Total reps:").bold(), total_reps(&workout));
    println!();

    Ok(())
}

async fn delete_workout(
    state: &AppState,
    id: &str,
    force: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let id = parse_id(id)?;
    let workout = state.workout_service.get_workout(&id).await?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete workout '{}'?", workout.name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.workout_service.delete_workout(&id).await?;

    if json {
        let output = serde_json::json!({ "deleted": id.to_string(), "name": workout.name });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !quiet {
        println!(
            "  {} Deleted workout {}",
            style("✓").green().bold(),
            style(&workout.name).cyan()
        );
    }

    Ok(())
}

fn parse_id(id: &str) -> Result<WorkoutId> {
    id.parse::<WorkoutId>()
        .with_context(|| format!("invalid workout id '{id}'"))
}

fn total_reps(workout: &Workout) -> u32 {
    workout
        .exercises
        .iter()
        .map(WorkoutExercise::total_reps)
        .fold(0u32, u32::saturating_add)
}
