//! Product identity resolution.
//!
//! A package of API resource definitions belongs to exactly one product.
//! The resolver combines the title carried by the package's API document
//! with any hand-authored overrides into an immutable [`ProductMetadata`],
//! and the derived accessors on that value re-read the override cache to
//! answer base-path, docs-section, and client-package questions for the
//! template layer.

mod metadata;
mod names;
mod resolver;

pub use metadata::ProductMetadata;
pub use names::{
    BasePathName, ClientPackageName, DocsSection, PackageName, PackagePath, ProductName,
};
pub use resolver::Resolver;

use crate::overrides::OverrideError;

/// Errors raised while resolving product metadata.
///
/// Resolution either fully succeeds or the generation run aborts; there is
/// no partial metadata state. The outer pipeline decides how to terminate.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Override(#[from] OverrideError),

    #[error("Product title override for package '{package}' is declared but empty")]
    EmptyTitleOverride { package: PackagePath },

    #[error("Could not derive a product title for package '{package}'")]
    MissingTitle { package: PackagePath },
}
