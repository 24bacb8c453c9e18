//! Tool catalog for Toolbox.
//!
//! This crate holds the authoritative list of utility tools shipped with
//! Toolbox, the [`ToolDescriptor`] value type describing each of them, and
//! the [`ToolRegistry`] that exposes the catalog as a frozen, ordered set.
//!
//! # Architecture
//!
//! - [`builtins`] is the single source of truth for the shipped tools.
//! - [`validation`] checks the registry invariants (unique ids, derived
//!   paths, non-empty metadata) and reports every violation at once.
//! - [`loader`] reads extra descriptors from TOML, JSON or YAML catalog
//!   files so deployments can add tools without recompiling.
//! - [`ToolRegistry`] is built once and never mutated afterwards.

pub mod builtins;
pub mod error;
pub mod loader;
mod store;
mod types;
pub mod validation;

pub use builtins::{BUILTIN_COUNT, builtin_descriptors};
pub use error::{Error, Result};
pub use loader::{CatalogLoader, load_document};
pub use store::ToolRegistry;
pub use types::{TOOLS_PATH_PREFIX, ToolCategory, ToolDescriptor};
pub use validation::{ValidationError, validate};
