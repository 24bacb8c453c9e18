//! Tool registry storage

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::{ToolCategory, ToolDescriptor};
use crate::validation::validate;

/// Frozen, ordered catalog of tool descriptors.
///
/// Provides lookup by id and filtering by category. Registry order is the
/// order descriptors were supplied in and is preserved by every listing.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    by_id: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a registry over the built-in catalog.
    pub fn with_builtins() -> Self {
        let tools = crate::builtins::builtin_descriptors();
        debug_assert!(validate(&tools).is_empty(), "built-in catalog is invalid");
        Self::freeze(tools)
    }

    /// Validate `tools` and build a registry from them.
    pub fn try_from_descriptors(tools: Vec<ToolDescriptor>) -> Result<Self> {
        let errors = validate(&tools);
        if !errors.is_empty() {
            return Err(Error::InvalidRegistry(errors));
        }
        Ok(Self::freeze(tools))
    }

    /// Build a new registry holding this catalog followed by `extra`.
    pub fn extend(&self, extra: Vec<ToolDescriptor>) -> Result<Self> {
        let mut tools = self.tools.clone();
        tools.extend(extra);
        Self::try_from_descriptors(tools)
    }

    fn freeze(tools: Vec<ToolDescriptor>) -> Self {
        let by_id = tools
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id().to_string(), i))
            .collect();
        tracing::debug!(count = tools.len(), "Tool registry built");
        Self { tools, by_id }
    }

    /// Get a descriptor by id.
    pub fn get(&self, id: &str) -> Option<&ToolDescriptor> {
        self.by_id.get(id).map(|&i| &self.tools[i])
    }

    /// Check if a tool is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All descriptors in registry order.
    pub fn all(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Iterate over all descriptors in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// All ids in registry order.
    pub fn ids(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.id()).collect()
    }

    /// Tools in `cat`, in registry order.
    pub fn by_category(&self, cat: ToolCategory) -> Vec<&ToolDescriptor> {
        self.tools.iter().filter(|t| t.category() == cat).collect()
    }
}

impl<'a> IntoIterator for &'a ToolRegistry {
    type Item = &'a ToolDescriptor;
    type IntoIter = std::slice::Iter<'a, ToolDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}
