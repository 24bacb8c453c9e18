//! Registry invariant checks
//!
//! A catalog is valid when every id is a unique slug, every path is the
//! one derived from its id, and every descriptor carries a name, a
//! description and at least one non-empty tag.

use std::collections::HashSet;

use crate::types::ToolDescriptor;

/// A single broken registry invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("duplicate id '{id}'")]
    DuplicateId { id: String },

    #[error("duplicate path '{path}'")]
    DuplicatePath { path: String },

    #[error("id '{id}' is not a lowercase slug")]
    InvalidId { id: String },

    #[error("tool '{id}' has path '{path}', expected '/tools/{id}'")]
    PathMismatch { id: String, path: String },

    #[error("tool '{id}' has an empty name")]
    EmptyName { id: String },

    #[error("tool '{id}' has an empty description")]
    EmptyDescription { id: String },

    #[error("tool '{id}' has no tags")]
    NoTags { id: String },

    #[error("tool '{id}' has an empty tag at position {index}")]
    EmptyTag { id: String, index: usize },
}

/// Check all registry invariants, returning every violation found.
pub fn validate(tools: &[ToolDescriptor]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut paths = HashSet::new();

    for tool in tools {
        let id = tool.id();

        if !is_slug(id) {
            errors.push(ValidationError::InvalidId { id: id.to_string() });
        }
        if !ids.insert(id) {
            errors.push(ValidationError::DuplicateId { id: id.to_string() });
        }
        if !paths.insert(tool.path()) {
            errors.push(ValidationError::DuplicatePath {
                path: tool.path().to_string(),
            });
        }
        if !tool.has_canonical_path() {
            errors.push(ValidationError::PathMismatch {
                id: id.to_string(),
                path: tool.path().to_string(),
            });
        }
        if tool.name().trim().is_empty() {
            errors.push(ValidationError::EmptyName { id: id.to_string() });
        }
        if tool.description().trim().is_empty() {
            errors.push(ValidationError::EmptyDescription { id: id.to_string() });
        }
        if tool.tags().is_empty() {
            errors.push(ValidationError::NoTags { id: id.to_string() });
        }
        for (index, tag) in tool.tags().iter().enumerate() {
            if tag.trim().is_empty() {
                errors.push(ValidationError::EmptyTag {
                    id: id.to_string(),
                    index,
                });
            }
        }
    }

    errors
}

/// Lowercase ASCII alphanumerics separated by single hyphens.
pub fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && id
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}
