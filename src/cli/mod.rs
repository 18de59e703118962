//! CLI command implementations

pub mod add;
pub mod done;
pub mod list;
pub mod remove;
pub mod start;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "tickdown", version, about = "Task tracker with countdown timers")]
pub struct Cli {
    /// Path to the task file
    #[arg(short, long, global = true, default_value = "data.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(add::AddArgs),

    /// List all tasks
    List(list::ListArgs),

    /// List tasks that are not done yet
    Pending(list::ListArgs),

    /// Mark a task as done
    Done(done::DoneArgs),

    /// Remove a task
    Remove(remove::RemoveArgs),

    /// Run the countdown timer for a task, then mark it done
    Start(start::StartArgs),

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Convert a 1-based index from the CLI into the internal 0-based form.
pub fn to_zero_based(index: usize) -> Result<usize> {
    match index.checked_sub(1) {
        Some(i) => Ok(i),
        None => bail!("task indices start at 1"),
    }
}
