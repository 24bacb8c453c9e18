//! Show command

use colored::Colorize;
use toolbox_search::ToolCatalog;

use crate::error::{CliError, Result};

/// Run the show command
pub fn run_show(catalog: &ToolCatalog, id: &str, json: bool) -> Result<()> {
    let tool = catalog.get_tool_by_id(id).ok_or_else(|| {
        let suggestions = catalog.suggest_ids(id, 3);
        let hint = if suggestions.is_empty() {
            "Use 'toolbox search' to find tools.".to_string()
        } else {
            format!("Did you mean: {}?", suggestions.join(", "))
        };
        CliError::user(format!("Unknown tool '{}'. {}", id, hint))
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(tool)?);
        return Ok(());
    }

    println!("{}", "Tool Information".bold());
    println!();
    println!("  {:<14} {}", "Name:".dimmed(), tool.name());
    println!("  {:<14} {}", "Id:".dimmed(), tool.id());
    println!("  {:<14} {}", "Category:".dimmed(), tool.category());
    println!("  {:<14} {}", "Path:".dimmed(), tool.path().cyan());
    println!("  {:<14} {}", "Description:".dimmed(), tool.description());
    println!("  {:<14} {}", "Tags:".dimmed(), tool.tags().join(", "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_known_tool() {
        let catalog = ToolCatalog::builtin();
        assert!(run_show(&catalog, "text-encoder", false).is_ok());
        assert!(run_show(&catalog, "text-encoder", true).is_ok());
    }

    #[test]
    fn test_show_unknown_tool_suggests() {
        let catalog = ToolCatalog::builtin();
        let err = run_show(&catalog, "json-formater", false).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown tool 'json-formater'"));
        assert!(message.contains("json-formatter"));
    }
}
