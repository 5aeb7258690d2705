//! Product catalog fields: category trees and specification blobs.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::text::CATEGORY_SEPARATOR;
use crate::error::{Error, Result};

/// Label used when a category level is missing.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

// ============================================================================
// CategoryPath
// ============================================================================

/// A product's category path, top level first.
///
/// Catalog rows store it as a one-element JSON list of a `>>`-separated
/// path:
///
/// ```
/// use dashboard_a11y::display::CategoryPath;
///
/// let path = CategoryPath::parse(r#"["Watches >> Wrist Watches >> Men"]"#).unwrap();
/// assert_eq!(path.main(), "Watches");
/// assert_eq!(path.sub(), "Wrist Watches");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryPath {
    segments: Vec<String>,
}

impl CategoryPath {
    /// Parses a category tree string.
    ///
    /// Only the first path of the list is used. An empty list gives an
    /// empty path.
    pub fn parse(tree: &str) -> Result<Self> {
        let paths: Vec<String> =
            serde_json::from_str(tree.trim()).map_err(|_| Error::CategoryTree(tree.to_string()))?;

        let segments = paths
            .first()
            .map(|path| {
                path.split(CATEGORY_SEPARATOR)
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { segments })
    }

    /// Top-level category, or [`UNKNOWN_CATEGORY`].
    pub fn main(&self) -> &str {
        self.segments.first().map_or(UNKNOWN_CATEGORY, String::as_str)
    }

    /// Second-level category, or [`UNKNOWN_CATEGORY`].
    pub fn sub(&self) -> &str {
        self.segments.get(1).map_or(UNKNOWN_CATEGORY, String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for CategoryPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(CATEGORY_SEPARATOR))
    }
}

// ============================================================================
// Specifications
// ============================================================================

/// Prefix of the hash-rocket specification blobs found in the catalog.
const SPECIFICATION_PREFIX: &str = r#"{"product_specification""#;

/// At most this many specifications are shown.
const MAX_SPECIFICATIONS: usize = 5;

#[derive(Deserialize)]
struct SpecificationDocument {
    product_specification: SpecificationEntries,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpecificationEntries {
    Many(Vec<SpecificationEntry>),
    One(SpecificationEntry),
}

#[derive(Deserialize)]
struct SpecificationEntry {
    key: Option<Value>,
    value: Option<Value>,
}

/// Strings are shown bare; numbers and other values in their JSON form.
fn specification_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Turns a raw specification field into a short `key: value; ...` line.
///
/// Blobs of the form `{"product_specification"=>[{"key"=>..,"value"=>..}]}`
/// are parsed and the first five complete pairs kept. Missing or unusable
/// specifications fall back to the retail price; any other text is returned
/// unchanged.
pub fn format_specifications(raw: Option<&str>, retail_price: impl fmt::Display) -> String {
    let fallback = || format!("Price: {retail_price} INR");

    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return fallback();
    };
    if !raw.starts_with(SPECIFICATION_PREFIX) {
        return raw.to_string();
    }

    match parse_specifications(raw) {
        Ok(pairs) if !pairs.is_empty() => pairs.join("; "),
        Ok(_) => fallback(),
        Err(err) => {
            warn!(error = %err, "unparsable product specification, using price");
            fallback()
        }
    }
}

fn parse_specifications(raw: &str) -> std::result::Result<Vec<String>, serde_json::Error> {
    let document: SpecificationDocument = serde_json::from_str(&raw.replace("=>", ":"))?;
    let entries = match document.product_specification {
        SpecificationEntries::Many(entries) => entries,
        SpecificationEntries::One(entry) => vec![entry],
    };

    Ok(entries
        .into_iter()
        .take(MAX_SPECIFICATIONS)
        .filter_map(|entry| {
            let key = specification_text(entry.key?)?;
            let value = specification_text(entry.value?)?;
            Some(format!("{key}: {value}"))
        })
        .collect())
}
