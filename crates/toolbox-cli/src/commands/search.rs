//! Search command

use colored::Colorize;
use toolbox_search::ToolCatalog;

use crate::error::Result;

/// Number of tags shown next to each result.
const TAGS_SHOWN: usize = 3;

/// Run the search command
pub fn run_search(catalog: &ToolCatalog, query: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let mut hits = catalog.search_scored(query);
    if let Some(limit) = limit {
        hits.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No tools match '{}'.", query.trim());
        println!(
            "Run {} to see every tool.",
            "toolbox list".cyan()
        );
        return Ok(());
    }

    for hit in &hits {
        let tool = hit.tool;
        let tags: Vec<_> = tool.tags().iter().take(TAGS_SHOWN).map(String::as_str).collect();
        println!(
            "  {:<24} {} {}",
            tool.id().green(),
            tool.name(),
            format!("[{}]", tags.join(", ")).dimmed()
        );
        println!("  {:<24} {}", "", tool.description().dimmed());
    }

    println!();
    println!("{} {} result(s).", "Total:".dimmed(), hits.len());
    Ok(())
}
