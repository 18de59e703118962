//! `tickdown remove` command implementation

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::task::Storage;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task index as shown by `tickdown list` (1-based)
    index: usize,
}

pub async fn run(file: &Path, args: RemoveArgs) -> Result<()> {
    let index = super::to_zero_based(args.index)?;

    let storage = Storage::new(file);
    let _lock = storage.lock()?;

    let mut list = storage.load()?;
    let removed = list.remove(index)?;
    storage.save(&list)?;

    println!("Removed: {}", removed.title);
    Ok(())
}
