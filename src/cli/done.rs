//! `tickdown done` command implementation

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::task::Storage;

#[derive(Args)]
pub struct DoneArgs {
    /// Task index as shown by `tickdown list` (1-based)
    index: usize,
}

pub async fn run(file: &Path, args: DoneArgs) -> Result<()> {
    let index = super::to_zero_based(args.index)?;

    let storage = Storage::new(file);
    let _lock = storage.lock()?;

    let mut list = storage.load()?;
    list.mark_done(index)?;
    storage.save(&list)?;

    println!("Completed: {}", list.get(index)?.display_line(args.index));
    Ok(())
}
