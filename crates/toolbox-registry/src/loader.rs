//! Loader for catalog and configuration files
//!
//! Files are parsed according to their extension:
//!
//! ```text
//! extra-tools.toml   [[tools]] array of tables
//! extra-tools.json   { "tools": [ ... ] }
//! extra-tools.yaml   tools: [ ... ]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::types::ToolDescriptor;

/// Upper bound on the size of any file read by the loader.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Read and deserialize a TOML, JSON or YAML document.
///
/// The format is chosen from the file extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(Error::io(path, e)),
    };
    if metadata.len() > MAX_FILE_SIZE {
        return Err(Error::ConfigTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_FILE_SIZE,
        });
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let format = match extension.as_str() {
        "toml" => "TOML",
        "json" => "JSON",
        "yaml" | "yml" => "YAML",
        _ => return Err(Error::UnsupportedFormat { extension }),
    };

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let parse_error = |message: String| Error::ConfigParse {
        path: path.to_path_buf(),
        format: format.to_string(),
        message,
    };

    match format {
        "TOML" => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        "JSON" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string())),
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tools: Vec<ToolDescriptor>,
}

/// Loads extra tool descriptors from catalog files.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load the descriptors from one catalog file, in file order.
    ///
    /// Descriptors are not validated here; registry construction does that
    /// against the full catalog.
    pub fn load(&self, path: &Path) -> Result<Vec<ToolDescriptor>> {
        let file: CatalogFile = load_document(path)?;
        if file.tools.is_empty() {
            tracing::warn!(path = %path.display(), "Catalog file declares no tools");
        } else {
            tracing::debug!(path = %path.display(), count = file.tools.len(), "Loaded catalog");
        }
        Ok(file.tools)
    }

    /// Load several catalog files, concatenated in the order given.
    pub fn load_all<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<ToolDescriptor>> {
        let mut tools = Vec::new();
        for path in paths {
            tools.extend(self.load(path.as_ref())?);
        }
        Ok(tools)
    }
}
