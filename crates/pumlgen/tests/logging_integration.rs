//! Integration tests for tracing spans and events
//!
//! These tests run the pipeline under a test subscriber to make sure the
//! instrumentation does not change the output.

use pumlgen::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

fn declarations() -> Vec<SourcedDeclaration> {
    vec![
        SourcedDeclaration::new(
            Declaration::class("Order")
                .in_namespace("Shop")
                .with_base("Entity")
                .with_member(Member::field("_lines", "OrderLine")),
            "/repo/Order.cs",
        ),
        SourcedDeclaration::new(Declaration::interface("IEntity"), "/repo/IEntity.cs"),
    ]
}

#[test]
fn test_tracing_spans_do_not_change_output() {
    let plain = pumlgen::generate(&declarations());

    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let traced = pumlgen::generate(&declarations());
    assert_eq!(plain, traced);
}

#[test]
fn test_manifest_loading_with_tracing() {
    let _guard = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .set_default();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Order.decl.json"),
        r#"{ "source": "Order.cs", "declarations": [{ "kind": "class", "name": "Order" }] }"#,
    )
    .unwrap();

    let report = Orchestrator::default()
        .inspect(&ManifestSource::new(dir.path()))
        .unwrap();
    assert_eq!(report.index.class_count(), 1);
}
