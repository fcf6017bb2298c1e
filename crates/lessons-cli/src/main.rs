//! Lessons CLI

mod catalog;
mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use lessons_core::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logger (RUST_LOG vẫn được ưu tiên)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let cli = Cli::parse();
    let catalog = catalog::build(&config);

    match cli.command {
        Commands::List(args) => commands::list::handle(&catalog, args)?,
        Commands::Run(args) => commands::run::handle(&catalog, args)?,
        Commands::All(args) => commands::run::handle_all(&catalog, args)?,
        Commands::Config => commands::config::handle(&config)?,
    }

    Ok(())
}
