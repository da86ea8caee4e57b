//! CLI command definitions and dispatch for the `sktree` binary.
//!
//! Uses clap derive macros for argument parsing. Categories are parsed with
//! `Category::from_str`, so an unknown category is rejected before any
//! command runs.

pub mod exercise;
pub mod levels;
pub mod profile;
pub mod reset;
pub mod tree;
pub mod unlock;
pub mod workout;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use console::style;

use skilltree_types::skill::{Category, UnlockStatus};

/// Track calisthenics skill progressions.
#[derive(Parser)]
#[command(name = "sktree", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Profile to operate on (defaults to `default_profile` in config.toml).
    #[arg(long, global = true, env = "SKILLTREE_PROFILE")]
    pub profile: Option<String>,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a category's skill tree with unlock status.
    Tree {
        /// push, pull, core or legs.
        category: Category,
    },

    /// Show one skill: prerequisites, status and what it leads to.
    Skill {
        category: Category,
        /// Skill id (e.g. `pullups`).
        id: String,
    },

    /// Unlock a skill after checking its prerequisites.
    Unlock {
        category: Category,
        id: String,

        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },

    /// Show per-category and overall levels.
    Levels,

    /// Reset progress for one category or all of them.
    Reset {
        /// Category to reset.
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        category: Option<Category>,

        /// Reset every category.
        #[arg(long)]
        all: bool,

        /// Skip confirmation prompt.
        #[arg(long, short)]
        force: bool,
    },

    /// List exercises available for workouts.
    Exercises {
        /// Only show exercises in this category.
        #[arg(long, short)]
        category: Option<Category>,

        /// Case-insensitive name filter.
        #[arg(long, short, default_value = "")]
        search: String,
    },

    /// Save, list, show and delete workouts.
    Workout {
        #[command(subcommand)]
        action: workout::WorkoutCommand,
    },

    /// List or delete local profiles.
    Profile {
        #[command(subcommand)]
        action: profile::ProfileCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Colored status label shared by the tree and skill views.
pub fn status_label(status: UnlockStatus) -> String {
    match status {
        UnlockStatus::Unlocked => style("● unlocked").green().to_string(),
        UnlockStatus::Eligible => style("○ eligible").yellow().to_string(),
        UnlockStatus::Locked => style("◌ locked").dim().to_string(),
    }
}
