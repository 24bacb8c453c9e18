//! List commands for tools and categories

use colored::Colorize;
use toolbox_registry::ToolCategory;
use toolbox_search::ToolCatalog;

use crate::error::Result;

/// Run the list command
pub fn run_list(catalog: &ToolCatalog, category_filter: Option<&str>, json: bool) -> Result<()> {
    let categories: Vec<ToolCategory> = match category_filter {
        Some(raw) => match raw.parse::<ToolCategory>() {
            Ok(category) => vec![category],
            Err(_) => {
                eprintln!(
                    "{} Unknown category '{}'. Valid: {}",
                    "warning:".yellow().bold(),
                    raw,
                    valid_categories()
                );
                Vec::new()
            }
        },
        None => ToolCategory::ALL.to_vec(),
    };

    if json {
        let tools: Vec<_> = categories
            .iter()
            .flat_map(|&c| catalog.get_tools_by_category(c))
            .collect();
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    println!("{}", "Available Tools".bold());
    println!();

    let mut total = 0;
    for category in categories {
        let tools = catalog.get_tools_by_category(category);
        if tools.is_empty() {
            continue;
        }

        println!("{}:", category.label().cyan().bold());
        for tool in &tools {
            println!("  {:<24} {}", tool.id().green(), tool.name());
        }
        println!();
        total += tools.len();
    }

    println!(
        "{} {} tools listed. Use {} for details.",
        "Total:".dimmed(),
        total,
        "toolbox show <id>".cyan()
    );

    Ok(())
}

/// Run the categories command
pub fn run_categories(catalog: &ToolCatalog) -> Result<()> {
    println!("{}", "Categories".bold());
    println!();

    for category in ToolCategory::ALL {
        let count = catalog.get_tools_by_category(category).len();
        println!("  {:<12} {:>3} tools", category.as_str().green(), count);
    }

    Ok(())
}

fn valid_categories() -> String {
    ToolCategory::ALL
        .iter()
        .map(ToolCategory::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
