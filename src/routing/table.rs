//! Path table construction.
//!
//! # Responsibilities
//! - Deserialize the YAML list of `{path, url}` entries
//! - Fold entries into an exact-match lookup table
//!
//! # Design Decisions
//! - Missing or null `path`/`url` keys become empty strings (no semantic validation)
//! - Scalar values (`123`, `true`) are taken as their text
//! - Duplicate paths: the last entry in the sequence wins
//! - Immutable after build; shared across requests via `Arc`

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Error produced when the redirect document cannot be deserialized.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid path table YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One element of the YAML sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathEntry {
    #[serde(deserialize_with = "null_as_empty")]
    pub path: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub url: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PathEntry {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Parse a YAML document of the form:
///
/// ```yaml
/// - path: /some-path
///   url: https://example.com/demo
/// ```
///
/// A document with no content (empty file, only comments) or an explicit
/// null (`~`) is an empty sequence.
pub fn parse_yaml(bytes: &[u8]) -> Result<Vec<PathEntry>, ParseError> {
    if is_blank_document(bytes) {
        return Ok(Vec::new());
    }
    let entries: Option<Vec<PathEntry>> = serde_yaml::from_slice(bytes)?;
    Ok(entries.unwrap_or_default())
}

fn is_blank_document(bytes: &[u8]) -> bool {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

/// Immutable mapping from request path to destination URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTable {
    entries: HashMap<String, String>,
}

impl PathTable {
    /// Build a table from entries in order. Later duplicates overwrite earlier ones.
    pub fn build(entries: impl IntoIterator<Item = PathEntry>) -> Self {
        entries.into_iter().collect()
    }

    /// Parse and build in one step. Either the whole table is built or none of it.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self, ParseError> {
        parse_yaml(bytes).map(Self::build)
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }
}

impl FromIterator<PathEntry> for PathTable {
    fn from_iter<I: IntoIterator<Item = PathEntry>>(iter: I) -> Self {
        iter.into_iter()
            .map(|entry| (entry.path, entry.url))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for PathTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for (path, url) in iter {
            entries.insert(path.into(), url.into());
        }
        Self { entries }
    }
}
