//! Core types for the tool catalog

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Every tool page lives under this route prefix.
pub const TOOLS_PATH_PREFIX: &str = "/tools/";

/// Tool category for filtering and organization.
///
/// The set is closed; catalog files naming any other category fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    /// Base64, URL and other text encodings
    Encoder,
    /// Format-to-format and unit conversions
    Converter,
    /// Pretty-printers and minifiers
    Formatter,
    /// Random data, codes and placeholder generators
    Generator,
    /// Numeric calculators
    Calculator,
    /// Drawing, color and image tools
    Designer,
    /// Hashing, encryption and password tooling
    Security,
    /// Tools aimed at programmers
    Developer,
    /// Everything else
    Other,
}

impl ToolCategory {
    /// All categories, in display order.
    pub const ALL: [ToolCategory; 9] = [
        ToolCategory::Encoder,
        ToolCategory::Converter,
        ToolCategory::Formatter,
        ToolCategory::Generator,
        ToolCategory::Calculator,
        ToolCategory::Designer,
        ToolCategory::Security,
        ToolCategory::Developer,
        ToolCategory::Other,
    ];

    /// Machine name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Encoder => "encoder",
            ToolCategory::Converter => "converter",
            ToolCategory::Formatter => "formatter",
            ToolCategory::Generator => "generator",
            ToolCategory::Calculator => "calculator",
            ToolCategory::Designer => "designer",
            ToolCategory::Security => "security",
            ToolCategory::Developer => "developer",
            ToolCategory::Other => "other",
        }
    }

    /// Plural heading used when grouping tools.
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Encoder => "Encoders",
            ToolCategory::Converter => "Converters",
            ToolCategory::Formatter => "Formatters",
            ToolCategory::Generator => "Generators",
            ToolCategory::Calculator => "Calculators",
            ToolCategory::Designer => "Design Tools",
            ToolCategory::Security => "Security Tools",
            ToolCategory::Developer => "Developer Tools",
            ToolCategory::Other => "Other Tools",
        }
    }
}

impl FromStr for ToolCategory {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ToolCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| Error::InvalidCategory {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one utility tool.
///
/// Descriptors are immutable once built. The route `path` is derived from
/// the `id` by [`ToolDescriptor::new`]; descriptors read from catalog files
/// may carry an explicit path, which validation checks against the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DescriptorRecord")]
pub struct ToolDescriptor {
    id: String,
    name: String,
    description: String,
    tags: Vec<String>,
    category: ToolCategory,
    path: String,
}

impl ToolDescriptor {
    /// Create a descriptor with no tags; add them with [`with_tags`](Self::with_tags).
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: ToolCategory,
    ) -> Self {
        let id = id.into();
        let path = Self::path_for(&id);
        Self {
            id,
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            category,
            path,
        }
    }

    /// Set the keyword tags (builder pattern).
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Route a tool page is served from.
    pub fn path_for(id: &str) -> String {
        format!("{TOOLS_PATH_PREFIX}{id}")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn category(&self) -> ToolCategory {
        self.category
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Check whether the stored path is the one derived from the id.
    pub fn has_canonical_path(&self) -> bool {
        self.path.strip_prefix(TOOLS_PATH_PREFIX) == Some(self.id.as_str())
    }
}

/// On-disk shape of a descriptor. Missing metadata is left empty so that
/// validation, rather than parsing, reports it.
#[derive(Deserialize)]
struct DescriptorRecord {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    category: ToolCategory,
    #[serde(default)]
    path: Option<String>,
}

impl From<DescriptorRecord> for ToolDescriptor {
    fn from(record: DescriptorRecord) -> Self {
        let path = record
            .path
            .unwrap_or_else(|| ToolDescriptor::path_for(&record.id));
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            tags: record.tags,
            category: record.category,
            path,
        }
    }
}
