//! Generator configuration

/// Conventional file name of the generated diagram
pub const DEFAULT_OUTPUT_FILE: &str = "ClassDiagrams.puml";

/// Output directory used under the project root when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "diagrams";

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// File name written inside the output directory
    pub output_file: String,
    /// Directory name under the project root used when no output is given
    pub default_output_dir: String,
    /// Type names treated as built-in on top of the fixed table
    pub extra_builtin_types: Vec<String>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            default_output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            extra_builtin_types: Vec::new(),
        }
    }

    pub fn with_output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = name.into();
        self
    }

    pub fn with_builtin_type(mut self, name: impl Into<String>) -> Self {
        self.extra_builtin_types.push(name.into());
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_file, "ClassDiagrams.puml");
        assert_eq!(config.default_output_dir, "diagrams");
        assert!(config.extra_builtin_types.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .with_output_file("Model.puml")
            .with_builtin_type("Guid");
        assert_eq!(config.output_file, "Model.puml");
        assert_eq!(config.extra_builtin_types, vec!["Guid"]);
    }
}
