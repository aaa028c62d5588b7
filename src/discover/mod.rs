//! Package discovery
//!
//! Enumerates the package paths beneath a specification root. A package is
//! any directory holding at least one API resource document (`.yaml` or
//! `.yml`); override configuration files are TOML and never count as
//! resource documents.

use std::collections::BTreeSet;
use std::path::Path;

use walkdir::WalkDir;

use crate::product::PackagePath;

/// Errors raised while walking the specification root.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("Failed to walk specification root: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Resource document outside specification root: {0}")]
    OutsideRoot(#[from] std::path::StripPrefixError),
}

/// Discover the package paths beneath `root`, sorted and deduplicated.
///
/// Documents directly at the root belong to no package and are ignored. An
/// empty result is not an error.
pub fn discover_packages(root: &Path) -> Result<Vec<PackagePath>, DiscoverError> {
    let mut packages = BTreeSet::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let extension = entry.path().extension().and_then(|e| e.to_str());
        if !matches!(extension, Some("yaml") | Some("yml")) {
            continue;
        }
        let parent = entry.path().parent().unwrap_or(root);
        let relative = parent.strip_prefix(root)?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        packages.insert(PackagePath::new(relative.to_string_lossy().into_owned()));
    }

    log::debug!(
        "discovered {} package(s) under {}",
        packages.len(),
        root.display()
    );
    Ok(packages.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_discovers_sorted_unique_packages() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "storage/ga/bucket.yaml");
        touch(dir.path(), "storage/ga/object.yaml");
        touch(dir.path(), "compute/beta/instance.yaml");

        let packages = discover_packages(dir.path()).unwrap();
        let paths: Vec<&str> = packages.iter().map(|p| p.as_str()).collect();
        assert_eq!(paths, vec!["compute/beta", "storage/ga"]);
    }

    #[test]
    fn test_ignores_non_resource_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "compute/beta/instance.yaml");
        touch(dir.path(), "compute/beta/product_overrides.toml");
        touch(dir.path(), "notes/README.md");

        let packages = discover_packages(dir.path()).unwrap();
        let paths: Vec<&str> = packages.iter().map(|p| p.as_str()).collect();
        assert_eq!(paths, vec!["compute/beta"]);
    }

    #[test]
    fn test_root_level_documents_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "stray.yaml");

        let packages = discover_packages(dir.path()).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn test_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_packages(dir.path()).unwrap().is_empty());
    }
}
