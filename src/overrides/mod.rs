//! Hand-authored override records for product metadata.
//!
//! Each package directory may carry a `product_overrides.toml` declaring
//! exceptions to the defaults derived from its API document: a replacement
//! title, a base-path identifier (or an instruction to skip emitting one),
//! or a documentation section. The store loads a package's records at most
//! once per run and serves every later lookup from its cache.

mod record;
mod source;
mod store;

pub use record::{
    BasePathDetails, DocsSectionDetails, OverrideEntry, OverrideKind, Overrides, TitleDetails,
};
pub use source::{FsOverrideSource, OverrideSource, OVERRIDE_FILE_NAME};
pub use store::OverrideStore;

use crate::product::PackagePath;

/// Errors raised while loading or decoding override records.
///
/// Every variant is fatal to a generation run: metadata resolved from a
/// half-understood override file would be ambiguous. An absent override is
/// not an error and is signaled by `Ok(None)` from lookups.
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    #[error("Failed to read override file for package '{package}': {source}")]
    Io {
        package: PackagePath,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse overrides for package '{package}': {detail}")]
    Parse { package: PackagePath, detail: String },

    #[error("Failed to decode {kind} override for package '{package}': {detail}")]
    Decode {
        kind: OverrideKind,
        package: PackagePath,
        detail: String,
    },

    #[error("Duplicate {kind} override for package '{package}'")]
    DuplicateKind {
        kind: OverrideKind,
        package: PackagePath,
    },

    #[error("Overrides not loaded for package '{package}'")]
    NotLoaded { package: PackagePath },
}
