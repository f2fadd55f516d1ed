// src/bin/dg.rs

use clap::Parser;
use colored::*;
use daily_grind::{cli::Cli, cli::dispatcher, core::config_loader};

/// Loads the registry, dispatches, and turns any error into exit status 1.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let loaded = config_loader::load()?;
    log::debug!(
        "Registry ready: {} app(s), {} group(s) (settings: '{}').",
        loaded.registry.apps.len(),
        loaded.registry.groups.len(),
        loaded.settings_path.display()
    );
    dispatcher::dispatch(&cli, &loaded.registry, loaded.dry_run)
}
