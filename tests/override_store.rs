//! Override store lifecycle tests
//!
//! Exercises the load-once cache contract: idempotent loads, the
//! first-caller-wins race under concurrent resolution, and the fatal paths
//! for malformed override files and violated preconditions.

use std::fs;
use std::path::Path;
use std::thread;

use provgen_product::mock::{FailingSource, RecordingSource, StaticSource};
use provgen_product::{
    FsOverrideSource, OverrideError, OverrideKind, OverrideStore, Overrides, PackagePath,
    ProductError, Resolver, TitleDetails,
};

fn write_overrides(root: &Path, package: &str, content: &str) {
    let dir = root.join(package);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("product_overrides.toml"), content).unwrap();
}

#[test]
fn test_resolve_and_accessors_load_exactly_once() {
    let source = RecordingSource::new(StaticSource::new());
    let counter = source.counter();
    let store = OverrideStore::new(source);
    let resolver = Resolver::new(&store);

    let metadata = resolver
        .resolve("Compute/Instance", PackagePath::new("compute/beta"))
        .unwrap();
    metadata.should_write_base_path(&store).unwrap();
    metadata.base_path_identifier(&store).unwrap();
    metadata.docs_section(&store).unwrap();
    resolver
        .resolve("Compute/Instance", PackagePath::new("compute/beta"))
        .unwrap();

    assert_eq!(counter.count(), 1);
}

#[test]
fn test_concurrent_first_load_is_single() {
    let source = RecordingSource::new(StaticSource::new());
    let counter = source.counter();
    let store = OverrideStore::new(source);
    let package = PackagePath::new("compute/beta");

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                store.ensure_loaded(&package).unwrap();
            });
        }
    });

    assert_eq!(counter.count(), 1);
}

#[test]
fn test_failing_load_is_fatal_through_resolver() {
    let store = OverrideStore::new(FailingSource::new("unreadable overrides"));
    let resolver = Resolver::new(&store);

    let err = resolver
        .resolve("Compute/Instance", PackagePath::new("compute/beta"))
        .unwrap_err();
    assert!(matches!(
        err,
        ProductError::Override(OverrideError::Parse { .. })
    ));
    assert!(err.to_string().contains("unreadable overrides"));
}

#[test]
fn test_duplicate_kind_in_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_overrides(
        dir.path(),
        "compute/beta",
        r#"
            [[override]]
            kind = "title"
            [override.details]
            title = "Compute"

            [[override]]
            kind = "title"
            [override.details]
            title = "ComputeBeta"
        "#,
    );
    let store = OverrideStore::new(FsOverrideSource::new(dir.path()));
    let resolver = Resolver::new(&store);

    let err = resolver
        .resolve("Compute/Instance", PackagePath::new("compute/beta"))
        .unwrap_err();
    assert!(matches!(
        err,
        ProductError::Override(OverrideError::DuplicateKind {
            kind: OverrideKind::Title,
            ..
        })
    ));
}

#[test]
fn test_malformed_payload_is_fatal_at_lookup() {
    let dir = tempfile::tempdir().unwrap();
    write_overrides(
        dir.path(),
        "compute/beta",
        r#"
            [[override]]
            kind = "title"
            [override.details]
            title = 7
        "#,
    );
    let store = OverrideStore::new(FsOverrideSource::new(dir.path()));
    let package = PackagePath::new("compute/beta");

    store.ensure_loaded(&package).unwrap();
    let err = store
        .lookup::<TitleDetails>(&package, OverrideKind::Title)
        .unwrap_err();
    assert!(matches!(
        err,
        OverrideError::Decode {
            kind: OverrideKind::Title,
            ..
        }
    ));
}

#[test]
fn test_lookup_before_load_is_precondition_violation() {
    let store = OverrideStore::new(StaticSource::new());
    let package = PackagePath::new("compute/beta");

    let err = store
        .lookup::<TitleDetails>(&package, OverrideKind::Title)
        .unwrap_err();
    assert!(matches!(err, OverrideError::NotLoaded { .. }));
}

#[test]
fn test_cached_entry_is_shared_not_reloaded() {
    let package = PackagePath::new("spanner/ga");
    let overrides = Overrides::parse(
        &package,
        r#"
            [[override]]
            kind = "title"
            [override.details]
            title = "Spanner"
        "#,
    )
    .unwrap();
    let source = RecordingSource::new(StaticSource::new().with_overrides(overrides));
    let counter = source.counter();
    let store = OverrideStore::new(source);

    store.ensure_loaded(&package).unwrap();
    for _ in 0..5 {
        let details: TitleDetails = store
            .lookup(&package, OverrideKind::Title)
            .unwrap()
            .unwrap();
        assert_eq!(details.title, "Spanner");
    }

    assert_eq!(counter.count(), 1);
}
