//! Override record model and TOML decoding.
//!
//! An override file is an array of `[[override]]` tables, each tagged with a
//! `kind` and carrying a kind-specific `details` table:
//!
//! ```toml
//! [[override]]
//! kind = "base_path"
//!
//! [override.details]
//! base_path_identifier = "os_config"
//! ```
//!
//! At most one record per kind may appear in a file.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OverrideError;
use crate::product::PackagePath;

/// The kinds of product override a package may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKind {
    /// Replace or suppress the product's base-path identifier.
    BasePath,
    /// Replace the title derived from the API document.
    Title,
    /// Replace the documentation section derived from the package name.
    DocsSection,
}

impl OverrideKind {
    /// Returns the tag used in override files and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverrideKind::BasePath => "base_path",
            OverrideKind::Title => "title",
            OverrideKind::DocsSection => "docs_section",
        }
    }
}

impl std::fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload of a `base_path` override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasePathDetails {
    /// When true, no base path is written for this product.
    #[serde(default)]
    pub skip: bool,

    /// Replacement base-path identifier (snake_case). An absent or empty
    /// value falls back to the product name.
    #[serde(default)]
    pub base_path_identifier: Option<String>,
}

/// Payload of a `title` override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleDetails {
    /// Replacement product title. Declaring the override with an empty
    /// title is a misconfiguration, not "no override".
    pub title: String,
}

/// Payload of a `docs_section` override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsSectionDetails {
    /// Documentation grouping identifier for the package.
    pub docs_section: String,
}

/// One record in an override file.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideEntry {
    /// Which default this record replaces.
    pub kind: OverrideKind,

    /// Kind-specific payload; decoded on lookup, not at load.
    #[serde(default)]
    pub details: Option<toml::Value>,
}

/// Top-level override file shape.
#[derive(Debug, Default, Deserialize)]
struct OverrideFile {
    #[serde(default, rename = "override")]
    overrides: Vec<OverrideEntry>,
}

/// The set of override records declared for one package path.
#[derive(Debug, Clone)]
pub struct Overrides {
    package: PackagePath,
    entries: Vec<OverrideEntry>,
}

impl Overrides {
    /// The empty set: no overrides declared for the package.
    pub fn empty(package: PackagePath) -> Self {
        Self {
            package,
            entries: Vec::new(),
        }
    }

    /// Parse an override file, rejecting duplicate kinds.
    pub fn parse(package: &PackagePath, content: &str) -> Result<Self, OverrideError> {
        let file: OverrideFile =
            toml::from_str(content).map_err(|e| OverrideError::Parse {
                package: package.clone(),
                detail: e.to_string(),
            })?;
        let overrides = Self {
            package: package.clone(),
            entries: file.overrides,
        };
        overrides.validate()?;
        Ok(overrides)
    }

    /// The package path these records are scoped to.
    pub fn package(&self) -> &PackagePath {
        &self.package
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode the payload of the override of `kind`, if one is declared.
    ///
    /// `Ok(None)` means the kind is not overridden and the caller must apply
    /// the document-derived default. A record whose payload fails to decode
    /// is a fatal configuration error.
    pub fn details_for<T: DeserializeOwned>(
        &self,
        kind: OverrideKind,
    ) -> Result<Option<T>, OverrideError> {
        let entry = match self.entries.iter().find(|e| e.kind == kind) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let details = entry
            .details
            .clone()
            .map(toml_to_json)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        serde_json::from_value(details)
            .map(Some)
            .map_err(|e| OverrideError::Decode {
                kind,
                package: self.package.clone(),
                detail: e.to_string(),
            })
    }

    fn validate(&self) -> Result<(), OverrideError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.kind == entry.kind) {
                return Err(OverrideError::DuplicateKind {
                    kind: entry.kind,
                    package: self.package.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Convert a TOML value to a JSON value so payloads decode through serde_json.
fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            Value::Object(map)
        }
    }
}
