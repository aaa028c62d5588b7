//! provgen product metadata resolution
//!
//! This crate resolves the canonical product identity for each package of
//! API resource definitions consumed by the provgen code-generation
//! pipeline: a title, a base-path identifier, a documentation section, and
//! the normalized naming forms templates expand. Values inferred from the
//! API document are merged with optional hand-authored override records
//! under a deterministic precedence rule, cached once per package path for
//! the lifetime of a generation run.

pub mod discover;
pub mod mock;
pub mod overrides;
pub mod product;

pub use discover::{discover_packages, DiscoverError};
pub use overrides::{
    BasePathDetails, DocsSectionDetails, FsOverrideSource, OverrideError, OverrideKind,
    OverrideSource, OverrideStore, Overrides, TitleDetails,
};
pub use product::{
    BasePathName, ClientPackageName, DocsSection, PackageName, PackagePath, ProductError,
    ProductMetadata, ProductName, Resolver,
};
