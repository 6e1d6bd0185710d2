mod cli;
mod commands;
mod display;

use clap::Parser;
use cli::{Cli, Commands};
use cmm_config::{CommandRestarter, Paths};
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        return commands::version::run();
    }

    let paths = Paths::resolve(cli.config)?;
    tracing::debug!(config = %paths.config_file.display(), "using config file");

    match cli.command {
        Commands::Routers => commands::routers::run(&paths),
        Commands::Health { json } => commands::health::run(&paths, json),
        Commands::Export { output, providers } => {
            commands::export::run(&paths, output.as_deref(), providers)
        }
        Commands::List { stats } => commands::list::run(&paths, stats),
        Commands::Search { query } => commands::search::run(&paths, &query),
        Commands::Check => commands::check::run(&paths),
        Commands::Set {
            provider,
            model,
            routes,
            no_restart,
            restart_timeout,
        } => {
            let restarter = (!no_restart).then(|| {
                CommandRestarter::default().with_timeout(Duration::from_secs(restart_timeout))
            });
            commands::set::run(&paths, &provider, &model, &routes, restarter)
        }
        Commands::Version => commands::version::run(),
    }
}
