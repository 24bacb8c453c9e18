//! Query interface over the registry and its search index

use toolbox_registry::{ToolCategory, ToolDescriptor, ToolRegistry};

use crate::error::Result;
use crate::index::{SearchHit, SearchIndex};
use crate::options::SearchOptions;

/// Minimum Jaro-Winkler similarity for an id to be offered as a suggestion.
const SUGGESTION_SIMILARITY: f64 = 0.8;

/// The registry plus the index derived from it, built once at startup.
///
/// All operations are read-only and never fail: unknown ids, unknown
/// categories and queries without hits produce empty results.
#[derive(Debug)]
pub struct ToolCatalog {
    registry: ToolRegistry,
    index: SearchIndex,
}

impl ToolCatalog {
    /// Build a catalog over `registry`, validating `options` first.
    pub fn new(registry: ToolRegistry, options: SearchOptions) -> Result<Self> {
        options.validate()?;
        let index = SearchIndex::new(registry.all(), options);
        Ok(Self { registry, index })
    }

    /// Catalog of the built-in tools with default search options.
    pub fn builtin() -> Self {
        let registry = ToolRegistry::with_builtins();
        let index = SearchIndex::new(registry.all(), SearchOptions::default());
        Self { registry, index }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Tools matching `query`, best first; the full name-sorted list for a
    /// blank query.
    pub fn search_tools(&self, query: &str) -> Vec<&ToolDescriptor> {
        self.index.search(query)
    }

    /// Ranked hits with relevance and matched fields.
    pub fn search_scored(&self, query: &str) -> Vec<SearchHit<'_>> {
        self.index.search_scored(query)
    }

    pub fn get_tool_by_id(&self, id: &str) -> Option<&ToolDescriptor> {
        self.registry.get(id)
    }

    /// Tools in `category`, in registry order.
    pub fn get_tools_by_category(&self, category: ToolCategory) -> Vec<&ToolDescriptor> {
        self.registry.by_category(category)
    }

    /// Category filter for unparsed input; unknown values match nothing.
    pub fn get_tools_by_category_str(&self, category: &str) -> Vec<&ToolDescriptor> {
        match category.parse::<ToolCategory>() {
            Ok(category) => self.get_tools_by_category(category),
            Err(_) => {
                tracing::debug!(category, "Unknown category requested");
                Vec::new()
            }
        }
    }

    /// Up to `limit` registered ids that look like `id`, most similar first.
    pub fn suggest_ids(&self, id: &str, limit: usize) -> Vec<&str> {
        let wanted = id.to_lowercase();
        let mut candidates: Vec<(f64, &str)> = self
            .registry
            .iter()
            .map(|tool| (strsim::jaro_winkler(&wanted, tool.id()), tool.id()))
            .filter(|(similarity, _)| *similarity >= SUGGESTION_SIMILARITY)
            .collect();
        candidates.sort_by(|a, b| b.0.total_cmp(&a.0));
        candidates.into_iter().take(limit).map(|(_, id)| id).collect()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
