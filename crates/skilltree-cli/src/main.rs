//! Skill tree tracker CLI entry point.
//!
//! Binary name: `sktree`
//!
//! Parses CLI arguments, initializes config and services, then dispatches
//! to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = skilltree_observe::verbosity_filter(cli.verbose, cli.quiet);
    if let Err(e) = skilltree_observe::init_tracing(filter, cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let result = run(cli).await;
    skilltree_observe::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "sktree", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.profile.as_deref()).await?;

    match cli.command {
        Commands::Tree { category } => {
            cli::tree::show_tree(&state, category, cli.json).await?;
        }

        Commands::Skill { category, id } => {
            cli::tree::show_skill(&state, category, &id, cli.json).await?;
        }

        Commands::Unlock { category, id, yes } => {
            cli::unlock::unlock_skill(&state, category, &id, yes, cli.json, cli.quiet).await?;
        }

        Commands::Levels => {
            cli::levels::show_levels(&state, cli.json).await?;
        }

        Commands::Reset {
            category,
            all,
            force,
        } => {
            let scope = if all { None } else { category };
            cli::reset::reset_progress(&state, scope, force, cli.json, cli.quiet).await?;
        }

        Commands::Exercises { category, search } => {
            cli::exercise::list_exercises(category, &search, cli.json)?;
        }

        Commands::Workout { action } => {
            cli::workout::handle_workout_command(action, &state, cli.json, cli.quiet).await?;
        }

        Commands::Profile { action } => {
            cli::profile::handle_profile_command(action, &state, cli.json, cli.quiet).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
