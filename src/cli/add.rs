//! `tickdown add` command implementation

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::task::{Storage, Task};

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Short description
    description: String,

    /// Estimated duration in minutes
    minutes: u64,
}

pub async fn run(file: &Path, args: AddArgs) -> Result<()> {
    let storage = Storage::new(file);
    let _lock = storage.lock()?;

    let mut list = storage.load()?;
    list.add(Task::new(args.title, args.description, args.minutes));
    storage.save(&list)?;

    if let Some(line) = list.lines().last() {
        println!("Added: {}", line);
    }
    Ok(())
}
