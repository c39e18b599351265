//! Built-in type classification
//!
//! Decides which member types are excluded from association inference. This
//! is a name-based heuristic over a fixed table: aliases, generic arguments
//! and user-defined types with colliding names are not resolved.

use std::collections::BTreeSet;

/// Scalar primitives and their boxed equivalents
const BUILTIN_TYPES: &[&str] = &[
    "string", "int", "bool", "double", "float", "decimal", "char", "byte", "object", "String",
    "Int32", "Boolean", "Double", "Single", "Decimal", "Char", "Byte", "Object",
];

/// Generic containers, matched as prefixes
const BUILTIN_PREFIXES: &[&str] = &["List<", "IEnumerable<", "Dictionary<"];

/// Classifier for built-in type names
#[derive(Debug, Clone, Default)]
pub struct TypeClassifier {
    extra: BTreeSet<String>,
}

impl TypeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name to the built-in table
    pub fn with_builtin(mut self, name: impl Into<String>) -> Self {
        self.extra.insert(name.into());
        self
    }

    /// Check whether `type_name` is built-in
    pub fn is_built_in(&self, type_name: &str) -> bool {
        BUILTIN_TYPES.contains(&type_name)
            || self.extra.contains(type_name)
            || BUILTIN_PREFIXES
                .iter()
                .any(|prefix| type_name.starts_with(prefix))
    }
}

impl<S: Into<String>> FromIterator<S> for TypeClassifier {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            extra: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_names() {
        let classifier = TypeClassifier::new();
        for name in ["string", "int", "bool", "Int32", "Object", "Single"] {
            assert!(classifier.is_built_in(name), "{} should be built-in", name);
        }
    }

    #[test]
    fn test_container_prefixes() {
        let classifier = TypeClassifier::new();
        assert!(classifier.is_built_in("List<Order>"));
        assert!(classifier.is_built_in("IEnumerable<string>"));
        assert!(classifier.is_built_in("Dictionary<string, Customer>"));
    }

    #[test]
    fn test_user_types_are_not_built_in() {
        let classifier = TypeClassifier::new();
        assert!(!classifier.is_built_in("Customer"));
        assert!(!classifier.is_built_in("HashSet<int>"));
        assert!(!classifier.is_built_in("int?"));
        assert!(!classifier.is_built_in("string[]"));
        // Prefix rule needs the generic bracket
        assert!(!classifier.is_built_in("ListView"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let classifier = TypeClassifier::new();
        assert!(!classifier.is_built_in("INT"));
        assert!(!classifier.is_built_in("list<int>"));
    }

    #[test]
    fn test_extra_names() {
        let classifier = TypeClassifier::new().with_builtin("Guid");
        assert!(classifier.is_built_in("Guid"));
        assert!(classifier.is_built_in("string"));

        let collected: TypeClassifier = ["DateTime", "TimeSpan"].into_iter().collect();
        assert!(collected.is_built_in("TimeSpan"));
        assert!(!collected.is_built_in("Guid"));
    }
}
