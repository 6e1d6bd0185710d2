use clap::{Parser, Subcommand};
use cmm_config::DEFAULT_RESTART_TIMEOUT;
use cmm_core::RouteSlot;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cmm")]
#[command(version)]
#[command(about = "Provider, model and route manager for claude-code-router")]
pub struct Cli {
    /// Router config file (defaults to ~/.claude-code-router/config.json)
    #[arg(long, global = true, env = "CMM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every route slot with its provider, model and status
    Routers,

    /// Show the health score, statistics and recommendations
    Health {
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the health report (or the provider list) as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export providers and their models instead of the health report
        #[arg(long)]
        providers: bool,
    },

    /// List active providers and their models
    List {
        /// Show provider and model counts for every provider
        #[arg(long)]
        stats: bool,
    },

    /// Search providers and models by name
    Search { query: String },

    /// Check the config document for structural problems
    Check,

    /// Point route slots at a provider and model, then restart the router
    Set {
        #[arg(short, long)]
        provider: String,

        #[arg(short, long)]
        model: String,

        /// Slot to update (repeatable; all slots when omitted)
        #[arg(short, long = "route")]
        routes: Vec<RouteSlot>,

        /// Skip restarting the router
        #[arg(long)]
        no_restart: bool,

        /// Give up on the restart after this many seconds
        #[arg(long, value_name = "SECS", default_value_t = DEFAULT_RESTART_TIMEOUT.as_secs())]
        restart_timeout: u64,
    },

    /// Print version information
    Version,
}
