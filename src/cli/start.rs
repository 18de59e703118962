//! `tickdown start` command implementation

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::task::Storage;
use crate::timer;

#[derive(Args)]
pub struct StartArgs {
    /// Task index as shown by `tickdown list` (1-based)
    index: usize,
}

pub async fn run(file: &Path, args: StartArgs) -> Result<()> {
    let index = super::to_zero_based(args.index)?;

    let storage = Storage::new(file);
    // Held across the whole countdown; other mutating invocations wait.
    let _lock = storage.lock()?;

    let mut list = storage.load()?;
    let (title, minutes) = {
        let task = list.get(index)?;
        (task.title.clone(), task.minutes)
    };

    println!("Starting: {} ({} min)", title, minutes);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let completed = timer::run_countdown(minutes, &cancel, |line| {
        print!("\r{}", line);
        let _ = std::io::stdout().flush();
    })
    .await;
    println!();

    if !completed {
        bail!("timer cancelled, task left pending");
    }

    list.mark_done(index)?;
    storage.save(&list)?;

    println!("Done: {}", title);
    Ok(())
}
