//! Weighted multi-field search index
//!
//! The index keeps its own copy of the catalog sorted by display name. Each
//! descriptor contributes one entry per indexed value (every tag is its own
//! value), lowercased once at build time together with a length norm so
//! that short values that match count for more than long ones.

use std::cmp::Ordering;

use serde::Serialize;
use toolbox_registry::ToolDescriptor;

use crate::matcher::Pattern;
use crate::options::SearchOptions;

/// Exact matches are clamped to this score so field weights still apply.
const EXACT_SCORE: f64 = f64::EPSILON;

/// A descriptor field covered by the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Id,
    Tags,
    Description,
    Category,
}

/// One ranked search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub tool: &'a ToolDescriptor,
    /// Relevance in `[0, 1]`, higher is better. `None` for the unfiltered
    /// listing returned for blank queries.
    pub relevance: Option<f64>,
    /// Fields with at least one matching value, deduplicated.
    pub matched: Vec<SearchField>,
}

#[derive(Debug)]
struct IndexedValue {
    field: SearchField,
    chars: Vec<char>,
    /// Effective exponent: normalized field weight times length norm.
    exponent: f64,
}

#[derive(Debug)]
struct IndexedTool {
    values: Vec<IndexedValue>,
}

/// Immutable fuzzy index over a name-sorted copy of the catalog.
#[derive(Debug)]
pub struct SearchIndex {
    sorted: Vec<ToolDescriptor>,
    records: Vec<IndexedTool>,
    options: SearchOptions,
}

impl SearchIndex {
    /// Build the index from validated options; [`crate::ToolCatalog::new`]
    /// is the public entry point.
    pub(crate) fn new(tools: &[ToolDescriptor], options: SearchOptions) -> Self {
        let mut sorted = tools.to_vec();
        sorted.sort_by(compare_names);

        let total = options.weights.total();
        let weights = [
            (SearchField::Name, options.weights.name / total),
            (SearchField::Id, options.weights.id / total),
            (SearchField::Tags, options.weights.tags / total),
            (SearchField::Description, options.weights.description / total),
            (SearchField::Category, options.weights.category / total),
        ];

        let records = sorted
            .iter()
            .map(|tool| {
                let mut values = Vec::new();
                for (field, weight) in weights {
                    if weight <= 0.0 {
                        continue;
                    }
                    for text in field_values(tool, field) {
                        values.push(IndexedValue {
                            field,
                            chars: text.to_lowercase().chars().collect(),
                            exponent: weight * field_norm(text),
                        });
                    }
                }
                IndexedTool { values }
            })
            .collect();

        tracing::debug!(tools = sorted.len(), "Search index built");
        Self {
            sorted,
            records,
            options,
        }
    }

    /// The catalog in index order (name ascending).
    pub fn sorted(&self) -> &[ToolDescriptor] {
        &self.sorted
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Descriptors matching `query`, best first.
    ///
    /// A blank query returns the whole catalog in name order.
    pub fn search(&self, query: &str) -> Vec<&ToolDescriptor> {
        self.search_scored(query)
            .into_iter()
            .map(|hit| hit.tool)
            .collect()
    }

    /// Like [`search`](Self::search) but keeps relevance and matched fields.
    pub fn search_scored(&self, query: &str) -> Vec<SearchHit<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return self
                .sorted
                .iter()
                .map(|tool| SearchHit {
                    tool,
                    relevance: None,
                    matched: Vec::new(),
                })
                .collect();
        }

        let pattern = Pattern::new(query, &self.options);
        let mut scored: Vec<(f64, SearchHit<'_>)> = self
            .sorted
            .iter()
            .zip(&self.records)
            .filter_map(|(tool, record)| {
                let mut total = 1.0;
                let mut matched = Vec::new();
                for value in &record.values {
                    if let Some(m) = pattern.find_in(&value.chars) {
                        total *= m.score.max(EXACT_SCORE).powf(value.exponent);
                        if !matched.contains(&value.field) {
                            matched.push(value.field);
                        }
                    }
                }
                if matched.is_empty() {
                    return None;
                }
                let hit = SearchHit {
                    tool,
                    relevance: Some(1.0 - total),
                    matched,
                };
                Some((total, hit))
            })
            .collect();

        // stable: equal scores keep name order
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));

        tracing::debug!(query, hits = scored.len(), "Search completed");
        scored.into_iter().map(|(_, hit)| hit).collect()
    }
}

/// Case-insensitive name order, falling back to the raw name and the id so
/// the order is total.
pub fn compare_names(a: &ToolDescriptor, b: &ToolDescriptor) -> Ordering {
    a.name()
        .to_lowercase()
        .cmp(&b.name().to_lowercase())
        .then_with(|| a.name().cmp(b.name()))
        .then_with(|| a.id().cmp(b.id()))
}

fn field_values(tool: &ToolDescriptor, field: SearchField) -> Vec<&str> {
    match field {
        SearchField::Name => vec![tool.name()],
        SearchField::Id => vec![tool.id()],
        SearchField::Tags => tool.tags().iter().map(String::as_str).collect(),
        SearchField::Description => vec![tool.description()],
        SearchField::Category => vec![tool.category().as_str()],
    }
}

/// `1 / sqrt(token_count)`, rounded to three decimals.
fn field_norm(text: &str) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count().max(1);
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbox_registry::ToolCategory;

    fn tool(id: &str, name: &str, tags: &[&str], category: ToolCategory) -> ToolDescriptor {
        ToolDescriptor::new(id, name, format!("{} utility", name), category).with_tags(tags.iter().copied())
    }

    fn sample() -> Vec<ToolDescriptor> {
        vec![
            tool("zip-tool", "zip tool", &["archive"], ToolCategory::Other),
            tool("base64-encoder", "Base64 Encoder", &["base64", "encode"], ToolCategory::Encoder),
            tool("alpha", "Alpha", &["first"], ToolCategory::Developer),
        ]
    }

    #[test]
    fn test_field_norm() {
        assert_eq!(field_norm("json"), 1.0);
        assert_eq!(field_norm("JSON Formatter"), 0.707);
        assert_eq!(field_norm("a b c d"), 0.5);
        assert_eq!(field_norm(""), 1.0);
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let index = SearchIndex::new(&sample(), SearchOptions::default());
        let names: Vec<_> = index.sorted().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Alpha", "Base64 Encoder", "zip tool"]);
    }

    #[test]
    fn test_blank_query_is_unscored_listing() {
        let index = SearchIndex::new(&sample(), SearchOptions::default());
        let hits = index.search_scored("  \t ");
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|h| h.relevance.is_none() && h.matched.is_empty()));
    }

    #[test]
    fn test_reports_matched_fields() {
        let index = SearchIndex::new(&sample(), SearchOptions::default());
        let hits = index.search_scored("base64");
        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].matched,
            vec![
                SearchField::Name,
                SearchField::Id,
                SearchField::Tags,
                SearchField::Description
            ]
        );
        let relevance = hits[0].relevance.unwrap();
        assert!(relevance > 0.99 && relevance <= 1.0);
    }

    #[test]
    fn test_zero_weight_field_is_not_indexed() {
        let mut options = SearchOptions::default();
        options.weights.category = 0.0;
        let index = SearchIndex::new(&sample(), options);
        assert!(index.search("encoder").iter().any(|t| t.id() == "base64-encoder"));
        assert!(index.search("developer").is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let index = SearchIndex::new(&sample(), SearchOptions::default());
        assert!(index.search("qqqqqq").is_empty());
    }
}
