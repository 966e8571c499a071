//! TOML configuration file support for imports.
//!
//! Metadata and write settings can be kept in a file instead of flags:
//!
//! ```toml
//! # capture.toml
//! [metadata]
//! sampling_frequency = 125e6
//! carrier_frequency = 433.92e6
//! "Comment" = "rooftop"
//! operator = "night shift"
//!
//! [write]
//! group = ["site", "roof"]
//! dataset_name = "Capture"
//! channel_suffixes = ["A", "B"]
//! overwrite = false
//! ```
//!
//! Command-line flags take precedence over the file.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use sm2117::metadata::{AttributeMap, AttributeValue};
use sm2117::path::{ChannelSuffixes, GroupPath};

/// Root configuration structure for sm2117 TOML files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Open-ended metadata: canonical names, aliases or extra keys.
    #[serde(default)]
    pub metadata: toml::Table,

    /// Where and how the dataset is written.
    #[serde(default)]
    pub write: WriteConfig,
}

/// Configuration for the write target.
#[derive(Debug, Default, Deserialize)]
pub struct WriteConfig {
    /// Group as "a/b/c" or as a list of segments.
    pub group: Option<GroupSpec>,

    /// Explicit dataset name.
    pub dataset_name: Option<String>,

    /// Channel suffixes; integers and strings may be mixed.
    pub channel_suffixes: Option<Vec<Suffix>>,

    /// Replace the container instead of appending.
    pub overwrite: Option<bool>,
}

/// A group given either as a path string or as segments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GroupSpec {
    /// `"a/b/c"`
    Path(String),
    /// `["a", "b", "c"]`
    Segments(Vec<String>),
}

impl From<GroupSpec> for GroupPath {
    fn from(spec: GroupSpec) -> Self {
        match spec {
            GroupSpec::Path(path) => GroupPath::parse(&path),
            GroupSpec::Segments(segments) => GroupPath::new(segments),
        }
    }
}

/// One channel suffix.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Suffix {
    /// Numeric suffix
    Index(i64),
    /// Text suffix
    Name(String),
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// The `[metadata]` table as an attribute map.
    pub fn metadata_map(&self) -> Result<AttributeMap> {
        let mut map = AttributeMap::new();
        for (key, value) in &self.metadata {
            map.insert(key.as_str(), to_attribute(key, value)?);
        }
        Ok(map)
    }

    /// Channel suffixes from the `[write]` table, if given.
    pub fn channel_suffixes(&self) -> Option<ChannelSuffixes> {
        self.write.channel_suffixes.as_ref().map(|list| {
            ChannelSuffixes::List(
                list.iter()
                    .map(|suffix| match suffix {
                        Suffix::Index(i) => i.to_string(),
                        Suffix::Name(name) => name.clone(),
                    })
                    .collect(),
            )
        })
    }
}

fn to_attribute(key: &str, value: &toml::Value) -> Result<AttributeValue> {
    Ok(match value {
        toml::Value::String(s) => AttributeValue::String(s.clone()),
        toml::Value::Integer(i) => AttributeValue::Integer(*i),
        toml::Value::Float(f) => AttributeValue::Float(*f),
        toml::Value::Boolean(b) => AttributeValue::Boolean(*b),
        // Date coercion happens in the normalizer
        toml::Value::Datetime(dt) => AttributeValue::String(dt.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            bail!("Metadata key '{}' must hold a scalar value", key)
        }
    })
}
