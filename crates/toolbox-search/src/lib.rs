//! Fuzzy tool search for Toolbox.
//!
//! The crate builds a [`SearchIndex`] once over a [`ToolRegistry`] and
//! exposes the read-only query interface through [`ToolCatalog`]:
//!
//! - `search_tools` ranks descriptors against a free-text query, tolerating
//!   single-character typos and weighting name and id matches above tags,
//!   description and category.
//! - `get_tool_by_id` is an exact lookup.
//! - `get_tools_by_category` filters in registry order.
//!
//! Everything is built at startup and immutable afterwards, so a catalog
//! can be shared freely between threads.
//!
//! [`ToolRegistry`]: toolbox_registry::ToolRegistry

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod matcher;
pub mod options;

pub use catalog::ToolCatalog;
pub use config::{CatalogConfig, DEFAULT_CONFIG_FILE, ToolboxConfig};
pub use error::{Error, Result};
pub use index::{SearchField, SearchHit, SearchIndex};
pub use matcher::{FieldMatch, Pattern};
pub use options::{FieldWeights, SearchOptions};
