//! Example sources
//!
//! Suppliers of example records beyond the local set. Each source may also
//! carry categories that get merged into the hierarchy under its own group.
//!
//! ```toml
//! name = "playground"
//! title = "Playground"
//!
//! [[categories]]
//! id = "sketches"
//! title = "Sketches"
//!
//! [[examples]]
//! id = "noise-sketch"
//! title = "Noise Sketch"
//! category = "sketches"
//! code = "..."
//! ```

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{CatalogError, Result};
use crate::example::AnyExample;

/// Supplier of example records
pub trait ExampleSource {
    /// Identifier used in logs and errors
    fn name(&self) -> &str;

    /// Group id and title that `categories()` merge into
    fn group(&self) -> (&str, &str) {
        (self.name(), self.name())
    }

    /// Categories to merge into the hierarchy
    fn categories(&self) -> Vec<Category> {
        Vec::new()
    }

    /// Records in supplier order
    fn examples(&self) -> Vec<AnyExample>;
}

/// Serialization format of an external source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    /// Pick a format from a file extension (case-insensitive)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Externally curated set of examples, deserialized from a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSource {
    pub name: String,
    /// Group title for merged categories (default: `name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Group id for merged categories (default: `name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub examples: Vec<AnyExample>,
}

impl ExternalSource {
    pub fn from_toml_str(source_name: &str, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogError::SourceParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_json_str(source_name: &str, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| CatalogError::SourceParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    pub fn parse(source_name: &str, content: &str, format: SourceFormat) -> Result<Self> {
        match format {
            SourceFormat::Toml => Self::from_toml_str(source_name, content),
            SourceFormat::Json => Self::from_json_str(source_name, content),
        }
    }
}

impl ExampleSource for ExternalSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> (&str, &str) {
        let id = self.group.as_deref().unwrap_or(&self.name);
        let title = self.title.as_deref().unwrap_or(&self.name);
        (id, title)
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn examples(&self) -> Vec<AnyExample> {
        self.examples.clone()
    }
}

/// In-memory source assembled in code
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    name: String,
    categories: Vec<Category>,
    examples: Vec<AnyExample>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_example(mut self, example: impl Into<AnyExample>) -> Self {
        self.examples.push(example.into());
        self
    }
}

impl ExampleSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn examples(&self) -> Vec<AnyExample> {
        self.examples.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYGROUND_TOML: &str = r##"
name = "playground"
title = "Playground"

[[categories]]
id = "sketches"
title = "Sketches"

[[categories.subcategories]]
id = "noise"
title = "Noise"

[[examples]]
id = "noise-sketch"
title = "Noise Sketch"
category = "sketches"
subcategory = "noise"
code = "WhiteNoise n;"

[[examples]]
id = "split-sketch"
title = "Split Sketch"
category = "sketches"
main_file = "main.cpp"

[[examples.files]]
path = "main.cpp"
content = "#include \"dsp.hpp\""

[[examples.files]]
path = "dsp.hpp"
content = "#pragma once"
"##;

    #[test]
    fn parse_toml_source() {
        let source = ExternalSource::from_toml_str("playground.toml", PLAYGROUND_TOML).unwrap();
        assert_eq!(source.name(), "playground");
        assert_eq!(source.group(), ("playground", "Playground"));
        assert_eq!(source.categories().len(), 1);
        assert_eq!(source.categories()[0].subcategories[0].id, "noise");

        let examples = source.examples();
        assert_eq!(examples.len(), 2);
        assert!(!examples[0].is_multi_file());
        assert!(examples[1].is_multi_file());
        assert_eq!(examples[1].main_content(), "#include \"dsp.hpp\"");
    }

    #[test]
    fn parse_json_source() {
        let json = r#"{
            "name": "community",
            "group": "instruments",
            "examples": [
                {"id": "wobble", "title": "Wobble", "category": "synths", "code": "x"}
            ]
        }"#;
        let source = ExternalSource::from_json_str("community.json", json).unwrap();
        assert_eq!(source.group(), ("instruments", "community"));
        assert!(source.categories().is_empty());
        assert_eq!(source.examples()[0].id(), "wobble");
    }

    #[test]
    fn parse_error_names_source() {
        let err = ExternalSource::from_toml_str("broken.toml", "name = ").unwrap_err();
        match err {
            CatalogError::SourceParse { source_name, .. } => {
                assert_eq!(source_name, "broken.toml")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn toml_record_with_files_but_no_main_file_loads_first_file() {
        let toml = r#"
name = "sketches"

[[examples]]
id = "loose-files"
title = "Loose Files"
category = "synths"
code = "unused"

[[examples.files]]
path = "voice.cpp"
content = "Voice v;"
"#;
        let source = ExternalSource::from_toml_str("sketches.toml", toml).unwrap();
        let example = &source.examples()[0];
        assert!(example.is_multi_file());
        assert_eq!(example.main_content(), "Voice v;");

        let catalog = crate::CatalogBuilder::new().with_source(source).build().unwrap();
        assert!(matches!(
            catalog.report(),
            [crate::IntegrityViolation::MissingMainFile { example_id, .. }] if example_id == "loose-files"
        ));
    }

    #[test]
    fn toml_parse_error_names_failing_record() {
        let toml = r#"
name = "sketches"

[[examples]]
id = "no-body"
title = "No Body"
category = "basics"
"#;
        let err = ExternalSource::from_toml_str("sketches.toml", toml).unwrap_err();
        assert!(err.to_string().contains("no-body"), "{err}");
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(SourceFormat::from_extension("toml"), Some(SourceFormat::Toml));
        assert_eq!(SourceFormat::from_extension("JSON"), Some(SourceFormat::Json));
        assert_eq!(SourceFormat::from_extension("yaml"), None);
    }

    #[test]
    fn static_source_keeps_insertion_order() {
        let source = StaticSource::new("tests")
            .with_category(Category::new("sketches", "Sketches"))
            .with_example(crate::example::Example {
                id: "b".to_string(),
                title: "B".to_string(),
                description: String::new(),
                category: "sketches".to_string(),
                subcategory: None,
                code: String::new(),
            })
            .with_example(crate::example::Example {
                id: "a".to_string(),
                title: "A".to_string(),
                description: String::new(),
                category: "sketches".to_string(),
                subcategory: None,
                code: String::new(),
            });
        let ids: Vec<String> = source.examples().iter().map(|e| e.id().to_string()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(source.group(), ("tests", "tests"));
    }
}
