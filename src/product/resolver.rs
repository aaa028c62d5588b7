//! Product metadata resolution.

use super::metadata::ProductMetadata;
use super::names::PackagePath;
use super::ProductError;
use crate::overrides::{OverrideKind, OverrideStore, TitleDetails};

/// Resolves the canonical product identity for a package.
///
/// Invoked once per package path by the outer pipeline. Resolution loads the
/// package's overrides into the store as a side effect; the returned value
/// is owned by the caller and is not cached here.
pub struct Resolver<'a> {
    store: &'a OverrideStore,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a OverrideStore) -> Self {
        Self { store }
    }

    /// Resolve metadata for `package_path` given the title string carried by
    /// its API document.
    ///
    /// A declared title override wins over the document title; a title
    /// override with an empty value and an underivable document title are
    /// both fatal.
    pub fn resolve(
        &self,
        document_title: &str,
        package_path: PackagePath,
    ) -> Result<ProductMetadata, ProductError> {
        self.store.ensure_loaded(&package_path)?;
        let title = self.product_title(document_title, &package_path)?;
        log::debug!(
            "resolved product title '{}' for package '{}'",
            title,
            package_path
        );
        Ok(ProductMetadata::new(package_path, &title))
    }

    /// The case-sensitive product title: the title override when declared,
    /// else the text before the first `/` of the document title.
    fn product_title(
        &self,
        document_title: &str,
        package: &PackagePath,
    ) -> Result<String, ProductError> {
        let details: Option<TitleDetails> = self.store.lookup(package, OverrideKind::Title)?;
        if let Some(details) = details {
            if details.title.is_empty() {
                return Err(ProductError::EmptyTitleOverride {
                    package: package.clone(),
                });
            }
            return Ok(details.title);
        }

        let title = document_title.split('/').next().unwrap_or("").trim();
        if title.is_empty() {
            return Err(ProductError::MissingTitle {
                package: package.clone(),
            });
        }
        Ok(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::StaticSource;
    use crate::overrides::Overrides;

    fn store_with(package: &str, toml: &str) -> OverrideStore {
        let package = PackagePath::new(package);
        let overrides = Overrides::parse(&package, toml).unwrap();
        OverrideStore::new(StaticSource::new().with_overrides(overrides))
    }

    #[test]
    fn test_title_from_document() {
        let store = OverrideStore::new(StaticSource::new());
        let resolver = Resolver::new(&store);

        let metadata = resolver
            .resolve("AccessContextManager/AccessPolicy", PackagePath::new("access_context_manager/ga"))
            .unwrap();

        assert_eq!(metadata.product_name.as_str(), "access_context_manager");
        assert_eq!(metadata.package_name.as_str(), "access_context_manager");
    }

    #[test]
    fn test_title_override_wins_over_document() {
        let store = store_with(
            "api_keys/ga",
            r#"
                [[override]]
                kind = "title"
                [override.details]
                title = "ApiKeys"
            "#,
        );
        let resolver = Resolver::new(&store);

        let metadata = resolver
            .resolve("Apikeys/Key", PackagePath::new("api_keys/ga"))
            .unwrap();

        assert_eq!(metadata.product_name.as_str(), "api_keys");
    }

    #[test]
    fn test_empty_title_override_is_fatal() {
        let store = store_with(
            "compute/beta",
            r#"
                [[override]]
                kind = "title"
                [override.details]
                title = ""
            "#,
        );
        let resolver = Resolver::new(&store);

        let err = resolver
            .resolve("Compute/Instance", PackagePath::new("compute/beta"))
            .unwrap_err();
        assert!(matches!(err, ProductError::EmptyTitleOverride { .. }));
    }

    #[test]
    fn test_empty_document_title_is_fatal() {
        let store = OverrideStore::new(StaticSource::new());
        let resolver = Resolver::new(&store);

        let err = resolver
            .resolve("", PackagePath::new("compute/beta"))
            .unwrap_err();
        assert!(matches!(err, ProductError::MissingTitle { .. }));
    }

    #[test]
    fn test_document_title_with_leading_separator_is_fatal() {
        let store = OverrideStore::new(StaticSource::new());
        let resolver = Resolver::new(&store);

        let err = resolver
            .resolve("/Instance", PackagePath::new("compute/beta"))
            .unwrap_err();
        assert!(matches!(err, ProductError::MissingTitle { .. }));
    }

    #[test]
    fn test_resolve_loads_overrides() {
        let store = OverrideStore::new(StaticSource::new());
        let resolver = Resolver::new(&store);
        let package = PackagePath::new("compute/beta");

        assert!(!store.is_loaded(&package));
        resolver.resolve("Compute/Instance", package.clone()).unwrap();
        assert!(store.is_loaded(&package));
    }
}
