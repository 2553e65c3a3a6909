//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::init::InitArgs;
use crate::commands::stats::StatsArgs;
use crate::commands::task::{AddArgs, EditArgs, ListArgs, RemoveArgs};

/// Category time tracker.
///
/// Keeps a project of named categories, each holding the tasks you spent
/// time on, and exports per-category duration statistics.
#[derive(Debug, Parser)]
#[command(name = "wt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new, empty project file.
    Init(InitArgs),

    /// Show the project name, file and totals.
    Status,

    /// Manage categories.
    #[command(subcommand)]
    Category(CategoryAction),

    /// Manage tasks.
    #[command(subcommand)]
    Task(TaskAction),

    /// Show the most recent task of every category.
    Recent {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print per-category duration statistics as CSV.
    Stats(StatsArgs),
}

/// Category subcommands.
#[derive(Debug, Subcommand)]
pub enum CategoryAction {
    /// List categories in sorted order.
    List,

    /// Add a category.
    Add {
        /// Category name.
        name: String,
    },

    /// Rename a category.
    Rename {
        /// Current category name.
        old: String,
        /// New category name.
        new: String,
    },

    /// Remove a category and all of its tasks.
    Remove {
        /// Category name.
        name: String,
    },
}

/// Task subcommands.
#[derive(Debug, Subcommand)]
pub enum TaskAction {
    /// List tasks of a category, or of every category.
    List(ListArgs),

    /// Record a task in a category.
    Add(AddArgs),

    /// Replace the title, duration and details of a task.
    Edit(EditArgs),

    /// Remove a task.
    Remove(RemoveArgs),
}
