//! Toolbox CLI
//!
//! Command-line access to the tool catalog: fuzzy search, lookup by id and
//! category listings.

mod cli;
mod commands;
mod error;

use std::io;
use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use toolbox_search::{ToolCatalog, ToolboxConfig};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = toolbox_search::logging::init(directive) {
        eprintln!("{} could not set up logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config.as_deref()),
        None => {
            println!("{} Find the right utility tool", "toolbox".green().bold());
            println!();
            println!("Run {} for available commands.", "toolbox --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Commands::Search { query, limit, json } => {
            let catalog = load_catalog(config_path)?;
            commands::run_search(&catalog, &query.join(" "), limit, json)
        }
        Commands::Show { id, json } => {
            let catalog = load_catalog(config_path)?;
            commands::run_show(&catalog, &id, json)
        }
        Commands::List { category, json } => {
            let catalog = load_catalog(config_path)?;
            commands::run_list(&catalog, category.as_deref(), json)
        }
        Commands::Categories => {
            let catalog = load_catalog(config_path)?;
            commands::run_categories(&catalog)
        }
        Commands::Validate => commands::run_validate(&load_config(config_path)?),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "toolbox", &mut io::stdout());
            Ok(())
        }
    }
}

fn load_config(config_path: Option<&Path>) -> Result<ToolboxConfig> {
    let config = match config_path {
        Some(path) => ToolboxConfig::load(path)?,
        None => ToolboxConfig::discover(&std::env::current_dir()?)?,
    };
    Ok(config)
}

fn load_catalog(config_path: Option<&Path>) -> Result<ToolCatalog> {
    Ok(load_config(config_path)?.build_catalog()?)
}
