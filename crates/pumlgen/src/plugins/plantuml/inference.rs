//! Relationship inference
//!
//! Derives inheritance edges from base-type lists and association edges from
//! typed fields and properties. Edges are identified by their rendered text,
//! so the same line produced twice is kept once, at its first position.

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, span, trace, Level};

use super::classifier::TypeClassifier;
use super::index::NamespaceIndex;
use crate::core::{MemberKind, SourcedDeclaration};

/// Relationship type between declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Inheritance, // --|>
    Association, // --> : has
}

/// A directed relationship between two type names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipEdge {
    pub kind: RelationshipKind,
    pub from: String,
    pub to: String,
}

impl RelationshipEdge {
    pub fn inheritance(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind: RelationshipKind::Inheritance,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn association(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind: RelationshipKind::Association,
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for RelationshipEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RelationshipKind::Inheritance => write!(f, "{} --|> {}", self.from, self.to),
            RelationshipKind::Association => write!(f, "{} --> {} : has", self.from, self.to),
        }
    }
}

/// Ordered set of relationships keyed by rendered text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipSet {
    edges: IndexMap<String, RelationshipEdge>,
}

impl RelationshipSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge, returning false if an edge with the same text exists
    pub fn insert(&mut self, edge: RelationshipEdge) -> bool {
        let text = edge.to_string();
        if self.edges.contains_key(&text) {
            trace!(edge = text.as_str(), "Skipping duplicate relationship");
            return false;
        }
        self.edges.insert(text, edge);
        true
    }

    pub fn edges(&self) -> impl Iterator<Item = &RelationshipEdge> {
        self.edges.values()
    }

    /// Rendered lines in first-seen order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn contains(&self, line: &str) -> bool {
        self.edges.contains_key(line)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Infers relationships from declarations
#[derive(Debug, Clone, Default)]
pub struct RelationshipInferencer {
    classifier: TypeClassifier,
}

impl RelationshipInferencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: TypeClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &TypeClassifier {
        &self.classifier
    }

    /// Infer every relationship of a run
    ///
    /// Inheritance edges come first, in discovery order. Association edges
    /// follow in diagram order: namespaces ascending, classes as indexed.
    pub fn infer(
        &self,
        declarations: &[SourcedDeclaration],
        index: &NamespaceIndex,
    ) -> RelationshipSet {
        let infer_span = span!(
            Level::DEBUG,
            "infer_relationships",
            declaration_count = declarations.len()
        );
        let _enter = infer_span.enter();

        let mut set = RelationshipSet::new();

        for entry in declarations.iter().filter(|e| e.declaration.is_class()) {
            self.collect_inheritance(entry, &mut set);
        }
        let inheritance_count = set.len();

        for package in index.packages() {
            for entry in package.classes() {
                self.collect_associations(entry, &mut set);
            }
        }

        debug!(
            inheritance_count,
            association_count = set.len() - inheritance_count,
            "Inferred relationships"
        );
        set
    }

    fn collect_inheritance(&self, entry: &SourcedDeclaration, set: &mut RelationshipSet) {
        let decl = &entry.declaration;
        for base in &decl.base_types {
            set.insert(RelationshipEdge::inheritance(&decl.name, base));
        }
    }

    fn collect_associations(&self, entry: &SourcedDeclaration, set: &mut RelationshipSet) {
        let decl = &entry.declaration;
        for member in &decl.members {
            match member.kind {
                MemberKind::Field | MemberKind::Property => {
                    if !self.classifier.is_built_in(&member.type_name) {
                        set.insert(RelationshipEdge::association(&decl.name, &member.type_name));
                    }
                }
                MemberKind::Method => {}
            }
        }
    }
}
