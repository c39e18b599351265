//! Namespace index
//!
//! Groups declarations into per-namespace packages. Packages iterate in
//! ascending lexical order of the namespace name; entries inside a package
//! keep scan order.

use std::collections::BTreeMap;

use tracing::{debug, span, trace, Level};

use crate::core::{DeclarationKind, SourcedDeclaration};

/// The declarations of one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacePackage {
    name: String,
    interfaces: Vec<SourcedDeclaration>,
    classes: Vec<SourcedDeclaration>,
}

impl NamespacePackage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interfaces: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interfaces(&self) -> &[SourcedDeclaration] {
        &self.interfaces
    }

    pub fn classes(&self) -> &[SourcedDeclaration] {
        &self.classes
    }

    fn push(&mut self, entry: SourcedDeclaration) {
        match entry.declaration.kind {
            DeclarationKind::Interface => self.interfaces.push(entry),
            DeclarationKind::Class => self.classes.push(entry),
        }
    }
}

/// Namespace name to package map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceIndex {
    packages: BTreeMap<String, NamespacePackage>,
}

impl NamespaceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index declarations in the order given
    pub fn build(declarations: &[SourcedDeclaration]) -> Self {
        let index_span = span!(
            Level::DEBUG,
            "index_namespaces",
            declaration_count = declarations.len()
        );
        let _enter = index_span.enter();

        let mut index = Self::new();
        for entry in declarations {
            index.insert(entry.clone());
        }

        debug!(
            namespace_count = index.package_count(),
            class_count = index.class_count(),
            interface_count = index.interface_count(),
            "Indexed declarations"
        );
        index
    }

    /// Add a declaration under its resolved namespace
    pub fn insert(&mut self, entry: SourcedDeclaration) {
        let namespace = entry.declaration.namespace_name().to_string();
        trace!(
            name = entry.name(),
            namespace = namespace.as_str(),
            kind = %entry.declaration.kind,
            "Indexing declaration"
        );
        self.packages
            .entry(namespace)
            .or_insert_with_key(|name| NamespacePackage::new(name.clone()))
            .push(entry);
    }

    /// Iterate packages in ascending namespace order
    pub fn packages(&self) -> impl Iterator<Item = &NamespacePackage> {
        self.packages.values()
    }

    pub fn get(&self, namespace: &str) -> Option<&NamespacePackage> {
        self.packages.get(namespace)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn class_count(&self) -> usize {
        self.packages.values().map(|p| p.classes.len()).sum()
    }

    pub fn interface_count(&self) -> usize {
        self.packages.values().map(|p| p.interfaces.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
