//! Configuration file loading
//!
//! A Toolbox configuration file tunes the matcher and names extra catalog
//! files to merge into the built-in registry:
//!
//! ```toml
//! [search]
//! threshold = 0.3
//!
//! [search.weights]
//! name = 2.0
//!
//! [catalog]
//! extra = ["more-tools.toml"]
//! ```
//!
//! Relative catalog paths resolve against the directory holding the
//! configuration file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use toolbox_registry::{CatalogLoader, ToolRegistry, load_document};

use crate::catalog::ToolCatalog;
use crate::error::Result;
use crate::options::SearchOptions;

/// File name looked up by [`ToolboxConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "toolbox.toml";

/// Catalog section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Extra catalog files, merged after the built-in tools in this order.
    pub extra: Vec<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    pub search: SearchOptions,
    pub catalog: CatalogConfig,
}

impl ToolboxConfig {
    /// Load a configuration file (TOML, JSON or YAML by extension).
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Self = load_document(path)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        config.search.validate()?;
        tracing::debug!(path = %path.display(), extra = config.catalog.extra.len(), "Loaded configuration");
        Ok(config)
    }

    /// Load `toolbox.toml` from `dir` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        for extra in &mut self.catalog.extra {
            if extra.is_relative() {
                *extra = base.join(&*extra);
            }
        }
    }

    /// Registry holding the built-in tools followed by every extra catalog.
    pub fn build_registry(&self) -> Result<ToolRegistry> {
        let registry = ToolRegistry::with_builtins();
        if self.catalog.extra.is_empty() {
            return Ok(registry);
        }
        let extra = CatalogLoader::new().load_all(&self.catalog.extra)?;
        Ok(registry.extend(extra)?)
    }

    /// Build the full query interface described by this configuration.
    pub fn build_catalog(&self) -> Result<ToolCatalog> {
        ToolCatalog::new(self.build_registry()?, self.search.clone())
    }
}
