//! Validate command

use colored::Colorize;
use toolbox_search::ToolboxConfig;

use crate::error::{CliError, Result};

/// Run the validate command
pub fn run_validate(config: &ToolboxConfig) -> Result<()> {
    match config.build_registry() {
        Ok(registry) => {
            println!(
                "{} {} tools, no problems found.",
                "ok:".green().bold(),
                registry.len()
            );
            Ok(())
        }
        Err(toolbox_search::Error::Registry(toolbox_registry::Error::InvalidRegistry(errors))) => {
            for error in &errors {
                eprintln!("  {} {}", "-".red(), error);
            }
            Err(CliError::user(format!(
                "Catalog has {} problem(s).",
                errors.len()
            )))
        }
        Err(e) => Err(e.into()),
    }
}
