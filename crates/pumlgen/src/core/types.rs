//! Core type definitions for declaration processing
//!
//! This module contains the declaration model handed over by the source
//! parser: declarations, their members, and the lexical scopes that enclose
//! them.

use std::fmt;
use std::path::{Path, PathBuf};

/// Namespace assigned to declarations without an enclosing namespace scope
pub const GLOBAL_NAMESPACE: &str = "Global";

/// Kind of a top-level declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Class => write!(f, "class"),
            DeclarationKind::Interface => write!(f, "interface"),
        }
    }
}

/// Kind of a declaration member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Field => write!(f, "field"),
            MemberKind::Property => write!(f, "property"),
            MemberKind::Method => write!(f, "method"),
        }
    }
}

/// A member of a class or interface
///
/// `type_name` holds the declared type for fields and properties and the
/// return type for methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    pub is_public: bool,
    pub type_name: String,
}

impl Member {
    pub fn new(kind: MemberKind, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            is_public: false,
            type_name: type_name.into(),
        }
    }

    pub fn field(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(MemberKind::Field, name, type_name)
    }

    pub fn property(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(MemberKind::Property, name, type_name)
    }

    pub fn method(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self::new(MemberKind::Method, name, return_type)
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Visibility marker used in the diagram grammar
    pub fn visibility_marker(&self) -> char {
        if self.is_public {
            '+'
        } else {
            '-'
        }
    }
}

/// Kind of a lexical scope enclosing a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Namespace,
    /// An enclosing type, for nested declarations
    Type,
}

/// A lexical scope enclosing a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub kind: ScopeKind,
    pub name: String,
}

impl Scope {
    pub fn namespace(name: impl Into<String>) -> Self {
        Self {
            kind: ScopeKind::Namespace,
            name: name.into(),
        }
    }

    pub fn type_scope(name: impl Into<String>) -> Self {
        Self {
            kind: ScopeKind::Type,
            name: name.into(),
        }
    }
}

/// A class or interface declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    /// Enclosing scopes, outermost first
    pub scopes: Vec<Scope>,
    pub members: Vec<Member>,
    /// Base class and implemented interfaces, in source order
    pub base_types: Vec<String>,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            scopes: Vec::new(),
            members: Vec::new(),
            base_types: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Class, name)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(DeclarationKind::Interface, name)
    }

    /// Push an enclosing namespace scope inside the current innermost scope
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.scopes.push(Scope::namespace(namespace));
        self
    }

    /// Push an enclosing type scope inside the current innermost scope
    pub fn nested_in(mut self, type_name: impl Into<String>) -> Self {
        self.scopes.push(Scope::type_scope(type_name));
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base_types.push(base.into());
        self
    }

    pub fn is_class(&self) -> bool {
        self.kind == DeclarationKind::Class
    }

    pub fn is_interface(&self) -> bool {
        self.kind == DeclarationKind::Interface
    }

    /// Resolve the namespace of this declaration
    ///
    /// Walks the enclosing scopes from the innermost outward and returns the
    /// first namespace found, or [`GLOBAL_NAMESPACE`].
    pub fn namespace_name(&self) -> &str {
        self.scopes
            .iter()
            .rev()
            .find(|scope| scope.kind == ScopeKind::Namespace)
            .map(|scope| scope.name.as_str())
            .unwrap_or(GLOBAL_NAMESPACE)
    }
}

/// A declaration paired with the file it was parsed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedDeclaration {
    pub declaration: Declaration,
    pub source: PathBuf,
}

impl SourcedDeclaration {
    pub fn new(declaration: Declaration, source: impl Into<PathBuf>) -> Self {
        Self {
            declaration,
            source: source.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
