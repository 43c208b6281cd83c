mod cli;
mod config;
mod demo;
mod error;
mod factorial;
mod largest;
mod reverse;

#[cfg(test)]
#[path = "equivalence_tests.rs"]
mod equivalence_tests;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    fmt().with_env_filter(EnvFilter::new(filter)).init();

    // 1. Resolve global config path (overridable via --config)
    let cfg_path = cli.config.unwrap_or_else(config::global_config_path);

    // 2. Auto-create global config on first launch
    config::ensure_global_config(&cfg_path)?;

    // 3. Load layered config (defaults <- file <- env)
    let cfg = config::load(&cfg_path)?;
    tracing::debug!("config loaded from {}", cfg_path.display());

    match cli.command {
        Commands::Reverse(args) => reverse::run(args)?,
        Commands::Factorial(args) => factorial::run(&cfg, args)?,
        Commands::Largest(args) => largest::run(args)?,
        Commands::Demo => demo::run(&cfg)?,
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
    }

    Ok(())
}
