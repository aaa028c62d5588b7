//! Semantic newtypes over identifier strings.
//!
//! Package paths, package names, product names, and base-path identifiers
//! share one underlying representation but permit different operations;
//! wrapping them keeps a snake_case product name from being handed to a
//! template slot expecting a package path.

use std::fmt;

use serde::{Deserialize, Serialize};

use provgen_casing::{snake_to_title_case, to_upper_case};

/// Path of a package of API resource definitions relative to the
/// specification root. Doubles as the override-lookup and cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackagePath(String);

impl PackagePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first `/` segment: the namespace of the package.
    pub fn package_name(&self) -> PackageName {
        PackageName(self.0.split('/').next().unwrap_or("").to_string())
    }

    /// The package path with all underscores removed, matching the client
    /// library's internal package naming convention: `access_context_manager`
    /// is published there as `accesscontextmanager`.
    pub fn client_package(&self) -> ClientPackageName {
        ClientPackageName(self.0.replace('_', ""))
    }
}

impl fmt::Display for PackagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Namespace of a package within the specification tree; the lowercase
/// fallback for the documentation section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageName(pub(crate) String);

impl PackageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// snake_case-normalized product title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(pub(crate) String);

impl ProductName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// TitleCase rendering of the product name.
    pub fn to_title_case(&self) -> String {
        snake_to_title_case(&self.0)
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// snake_case base-path identifier of a product, either overridden or
/// falling back to the product name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasePathName(String);

impl BasePathName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// TitleCase rendering of the identifier.
    ///
    /// Identifiers starting with `os` render as `OS` plus the title-cased
    /// remainder (`OSConfig`, not `OsConfig`), for interop with the naming
    /// convention of the surrounding provider codebase.
    pub fn to_title_case(&self) -> String {
        let title = snake_to_title_case(&self.0);
        if self.0.starts_with("os") {
            format!("OS{}", &title[2..])
        } else {
            title
        }
    }

    /// UPPERCASE rendering of the identifier, underscores preserved.
    pub fn to_upper_case(&self) -> String {
        to_upper_case(&self.0)
    }
}

impl From<ProductName> for BasePathName {
    fn from(name: ProductName) -> Self {
        Self(name.0)
    }
}

impl fmt::Display for BasePathName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Documentation grouping identifier for a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocsSection(pub(crate) String);

impl DocsSection {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the client library package generated code links against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientPackageName(String);

impl ClientPackageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientPackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
