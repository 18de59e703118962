//! `tickdown list` and `tickdown pending` command implementations

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::task::Storage;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    index: usize,
    title: &'a str,
    description: &'a str,
    done: bool,
    minutes: u64,
}

pub async fn run(file: &Path, args: ListArgs) -> Result<()> {
    print_tasks(file, args, false)
}

pub async fn run_pending(file: &Path, args: ListArgs) -> Result<()> {
    print_tasks(file, args, true)
}

fn print_tasks(file: &Path, args: ListArgs, pending_only: bool) -> Result<()> {
    let storage = Storage::new(file);
    let list = storage.load()?;

    if args.json {
        let tasks: Vec<TaskJson> = list
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| !pending_only || !task.is_done)
            .map(|(i, task)| TaskJson {
                index: i + 1,
                title: &task.title,
                description: &task.description,
                done: task.is_done,
                minutes: task.minutes,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let lines: Vec<String> = if pending_only {
        list.pending_lines().collect()
    } else {
        list.lines().collect()
    };

    if lines.is_empty() {
        println!("No tasks found");
        return Ok(());
    }

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
