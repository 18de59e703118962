//! Tickdown - command-line task tracker with countdown timers

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tickdown::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TICKDOWN_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tickdown=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "tickdown", &mut std::io::stdout());
            Ok(())
        }
        Commands::Add(args) => cli::add::run(&cli.file, args).await,
        Commands::List(args) => cli::list::run(&cli.file, args).await,
        Commands::Pending(args) => cli::list::run_pending(&cli.file, args).await,
        Commands::Done(args) => cli::done::run(&cli.file, args).await,
        Commands::Remove(args) => cli::remove::run(&cli.file, args).await,
        Commands::Start(args) => cli::start::run(&cli.file, args).await,
    }
}
