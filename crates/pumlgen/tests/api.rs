//! Integration tests for the public API

use pumlgen::prelude::*;
use std::path::Path;

fn sourced(declaration: Declaration) -> SourcedDeclaration {
    let file = format!("/repo/src/{}.cs", declaration.name);
    SourcedDeclaration::new(declaration, file)
}

#[test]
fn test_end_to_end_three_classes() {
    let declarations = vec![
        sourced(
            Declaration::class("ClassA")
                .in_namespace("N")
                .with_member(Member::field("_b", "ClassB"))
                .with_member(Member::property("PropertyC", "ClassC").public()),
        ),
        sourced(Declaration::class("ClassB").in_namespace("N")),
        sourced(Declaration::class("ClassC").in_namespace("N")),
    ];

    let puml = pumlgen::generate(&declarations);
    assert_eq!(puml.matches("package N {").count(), 1);
    assert_eq!(puml.matches("class Class").count(), 3);
    assert!(puml.contains("    - _b : ClassB\n"));
    assert!(puml.contains("    + PropertyC : ClassC\n"));
    assert!(puml.contains("ClassA --> ClassB : has\nClassA --> ClassC : has\n"));
}

#[test]
fn test_public_builtin_field_has_no_edge() {
    let declarations = vec![sourced(
        Declaration::class("SimpleClass")
            .in_namespace("TestNamespace")
            .with_member(Member::field("Test", "string").public()),
    )];

    let report = GenerationPipeline::new().run(&declarations);
    assert!(report.document.contains("    + Test : string\n"));
    assert!(report.relationships.is_empty());
}

#[test]
fn test_inheritance_edges_in_base_order() {
    let declarations = vec![sourced(
        Declaration::class("Derived")
            .in_namespace("N")
            .with_base("Base")
            .with_base("ITest"),
    )];

    let relationships = RelationshipInferencer::new()
        .infer(&declarations, &NamespaceIndex::build(&declarations));
    let lines: Vec<_> = relationships.lines().collect();
    assert_eq!(lines, vec!["Derived --|> Base", "Derived --|> ITest"]);
}

#[test]
fn test_duplicate_member_types_give_one_edge() {
    let declarations = vec![sourced(
        Declaration::class("Owner")
            .with_member(Member::field("_first", "Target"))
            .with_member(Member::property("Second", "Target").public()),
    )];

    let puml = pumlgen::generate(&declarations);
    assert_eq!(puml.matches("Owner --> Target : has").count(), 1);
}

#[test]
fn test_inheritance_precedes_associations() {
    // Inheritance comes from scan order, associations from namespace order
    let declarations = vec![
        sourced(
            Declaration::class("Zeta")
                .in_namespace("B")
                .with_base("Root")
                .with_member(Member::field("_a", "Alpha")),
        ),
        sourced(
            Declaration::class("Alpha")
                .in_namespace("A")
                .with_base("Root")
                .with_member(Member::field("_z", "Zeta")),
        ),
    ];

    let puml = pumlgen::generate(&declarations);
    assert!(puml.ends_with(
        "' Relationships\n\
         Zeta --|> Root\n\
         Alpha --|> Root\n\
         Alpha --> Zeta : has\n\
         Zeta --> Alpha : has\n\
         @enduml\n"
    ));
}

#[test]
fn test_interfaces_do_not_produce_edges() {
    let declarations = vec![sourced(
        Declaration::interface("IRepository")
            .with_base("IDisposable")
            .with_member(Member::property("Current", "Order"))
            .with_member(Member::method("Load", "Order")),
    )];

    let report = GenerationPipeline::new().run(&declarations);
    assert!(report.relationships.is_empty());
    assert!(report.document.contains("    + Current : Order\n"));
    assert!(report.document.contains("    + Load()\n"));
}

#[test]
fn test_configured_builtin_suppresses_edge() {
    let config = GeneratorConfig::new().with_builtin_type("Guid");
    let declarations = vec![sourced(
        Declaration::class("Order").with_member(Member::field("_id", "Guid")),
    )];

    let with_config = GenerationPipeline::from_config(&config).generate(&declarations);
    let without = GenerationPipeline::new().generate(&declarations);
    assert!(!with_config.contains("Order --> Guid : has"));
    assert!(without.contains("Order --> Guid : has"));
}

#[test]
fn test_nested_type_uses_enclosing_namespace() {
    let declarations = vec![sourced(
        Declaration::class("Inner")
            .in_namespace("Outer.Space")
            .nested_in("Container"),
    )];

    let index = NamespaceIndex::build(&declarations);
    assert_eq!(index.namespaces().collect::<Vec<_>>(), vec!["Outer.Space"]);
}

#[test]
fn test_type_classifier_table() {
    let classifier = TypeClassifier::new();
    for name in ["string", "int", "Decimal", "Boolean", "decimal", "object"] {
        assert!(classifier.is_built_in(name), "{} should be built-in", name);
    }
    assert!(classifier.is_built_in("List<Order>"));
    assert!(classifier.is_built_in("Dictionary<string, Order>"));
    assert!(!classifier.is_built_in("Order"));
    assert!(!classifier.is_built_in("Order[]"));
    assert!(!classifier.is_built_in("DateTime"));
}

#[test]
fn test_renderer_links_each_entity() {
    let declarations = vec![
        sourced(Declaration::interface("IShape").in_namespace("Geometry")),
        sourced(Declaration::class("Circle").in_namespace("Geometry")),
    ];

    let puml = pumlgen::generate(&declarations);
    let headers: Vec<_> = puml
        .lines()
        .filter(|line| line.starts_with("class ") || line.starts_with("interface "))
        .collect();
    assert_eq!(headers.len(), 2);
    for header in headers {
        assert!(header.contains("<<Clickable>> [[file:///"), "{}", header);
        assert!(header.ends_with("]] {"), "{}", header);
    }
}

#[test]
fn test_orchestrator_with_fixed_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Shop.decl.json"),
        r#"{ "source": "Shop.cs", "declarations": [{ "kind": "class", "name": "Cart" }] }"#,
    )
    .unwrap();

    let orchestrator = Orchestrator::with_collaborators(
        GeneratorConfig::default(),
        Box::new(pumlgen::FixedRoot(dir.path().to_path_buf())),
        Box::new(FsDocumentWriter::new()),
    );
    let path = orchestrator.generate_default(Path::new("/unused")).unwrap();

    assert_eq!(path, dir.path().join("diagrams").join("ClassDiagrams.puml"));
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.contains("class Cart <<Clickable>>"));
}
