mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "routemap")]
#[command(version, about = "RouteMap CLI - render, parse and dry-run route tables", long_about = None)]
struct Cli {
    /// Rule table to load
    #[arg(short, long, global = true, default_value = "routemap.toml")]
    config: PathBuf,

    /// Log rule registration and dispatch
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the canonical path for a route template
    Hash {
        /// Route template, e.g. /users/:id/tab:?
        route: String,

        /// Parameter values as key=value
        params: Vec<String>,

        /// Prepend the configured prefix
        #[arg(short, long)]
        link: bool,
    },

    /// Match a path against the rule table
    Parse {
        /// Path to match (without prefix)
        path: String,

        /// Print the match as JSON
        #[arg(long)]
        json: bool,
    },

    /// List rules in match-priority order
    Rules,

    /// Navigate through paths in order, printing each dispatch
    Dispatch {
        /// Paths to visit (without prefix)
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("routemap=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Hash {
            route,
            params,
            link,
        } => {
            commands::hash::execute(&cli.config, &route, &params, link)?;
        }
        Commands::Parse { path, json } => {
            commands::parse::execute(&cli.config, &path, json)?;
        }
        Commands::Rules => {
            commands::rules::execute(&cli.config)?;
        }
        Commands::Dispatch { paths } => {
            commands::dispatch::execute(&cli.config, &paths)?;
        }
    }

    Ok(())
}
