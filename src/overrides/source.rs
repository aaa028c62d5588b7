//! Override configuration loading.
//!
//! The store is generic over where records come from so tests can inject
//! counting or failing sources. Production loads read a fixed-name TOML file
//! from the package's directory beneath the specification root.

use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use super::record::Overrides;
use super::OverrideError;
use crate::product::PackagePath;

/// Name of the override file inside each package directory.
pub const OVERRIDE_FILE_NAME: &str = "product_overrides.toml";

/// Collaborator that loads the override records declared for a package.
pub trait OverrideSource {
    /// Load the records for `package`. A package with no overrides declared
    /// yields the empty set, not an error.
    fn load(&self, package: &PackagePath) -> Result<Overrides, OverrideError>;
}

/// Loads overrides from `<root>/<package>/product_overrides.toml`.
#[derive(Debug, Clone)]
pub struct FsOverrideSource {
    root: PathBuf,
    file_name: String,
}

impl FsOverrideSource {
    /// Create a source rooted at the specification directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: OVERRIDE_FILE_NAME.to_string(),
        }
    }

    /// Replace the override file name looked up in each package directory.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

impl OverrideSource for FsOverrideSource {
    fn load(&self, package: &PackagePath) -> Result<Overrides, OverrideError> {
        let path = self.root.join(package.as_str()).join(&self.file_name);
        if !path.exists() {
            log::debug!("no overrides declared for package '{}'", package);
            return Ok(Overrides::empty(package.clone()));
        }

        let bytes = fs::read(&path).map_err(|e| OverrideError::Io {
            package: package.clone(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());
        log::debug!(
            "loading overrides for package '{}' from {} (sha256 {})",
            package,
            path.display(),
            digest
        );

        let content = String::from_utf8(bytes).map_err(|e| OverrideError::Parse {
            package: package.clone(),
            detail: format!("Invalid UTF-8: {}", e),
        })?;

        Overrides::parse(package, &content)
    }
}
