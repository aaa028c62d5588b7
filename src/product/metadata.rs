//! Resolved product metadata and its derived accessors.

use serde::Serialize;

use super::names::{BasePathName, ClientPackageName, DocsSection, PackageName, PackagePath, ProductName};
use super::ProductError;
use crate::overrides::{BasePathDetails, DocsSectionDetails, OverrideKind, OverrideStore};

use provgen_casing::to_snake_case;

/// Canonical product identity of one package, resolved once per run.
///
/// The value is immutable and owned by the caller; the derived accessors
/// re-consult the override store on every call rather than caching locally,
/// so the store they are handed must be the one the value was resolved
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductMetadata {
    /// Path of the package relative to the specification root.
    pub package_path: PackagePath,
    /// Namespace of the package; normally a lowercase variant of the
    /// product name.
    pub package_name: PackageName,
    /// snake_case name of the product the package's resources belong to.
    pub product_name: ProductName,
}

impl ProductMetadata {
    pub(crate) fn new(package_path: PackagePath, title: &str) -> Self {
        let package_name = package_path.package_name();
        let product_name = ProductName(to_snake_case(title));
        Self {
            package_path,
            package_name,
            product_name,
        }
    }

    /// Whether a base path should be written for this product.
    ///
    /// True unless a base-path override exists with its skip flag set.
    pub fn should_write_base_path(&self, store: &OverrideStore) -> Result<bool, ProductError> {
        Ok(match self.base_path_details(store)? {
            Some(details) => !details.skip,
            None => true,
        })
    }

    /// The product's base-path identifier: the override's identifier when
    /// declared and non-empty, else the product name.
    pub fn base_path_identifier(&self, store: &OverrideStore) -> Result<BasePathName, ProductError> {
        if let Some(details) = self.base_path_details(store)? {
            if let Some(identifier) = details.base_path_identifier.filter(|id| !id.is_empty()) {
                return Ok(BasePathName::new(identifier));
            }
        }
        Ok(BasePathName::from(self.product_name.clone()))
    }

    /// The documentation section for the package: the override's section
    /// when declared, else the package name.
    pub fn docs_section(&self, store: &OverrideStore) -> Result<DocsSection, ProductError> {
        let details: Option<DocsSectionDetails> =
            store.lookup(&self.package_path, OverrideKind::DocsSection)?;
        Ok(match details {
            Some(details) => DocsSection(details.docs_section),
            None => DocsSection(self.package_name.as_str().to_string()),
        })
    }

    /// The client library package this product's generated code links
    /// against: the package path with underscores removed.
    pub fn client_package(&self) -> ClientPackageName {
        self.package_path.client_package()
    }

    fn base_path_details(
        &self,
        store: &OverrideStore,
    ) -> Result<Option<BasePathDetails>, ProductError> {
        Ok(store.lookup(&self.package_path, OverrideKind::BasePath)?)
    }
}
