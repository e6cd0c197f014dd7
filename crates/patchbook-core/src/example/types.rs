//! Example record types
//!
//! # Shapes
//! ```text
//! AnyExample
//! ├── Single: one opaque `code` block
//! └── Multi:  named files + `main_file` pointer
//! ```
//!
//! On the wire the two shapes carry no tag. A record with a `files`
//! collection is multi-file, anything else is single-file. In memory the
//! distinction is an enum so every match is exhaustive.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Single-file example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub code: String,
}

/// One named text blob of a multi-file example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleFile {
    pub path: String,
    pub content: String,
}

impl ExampleFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Multi-file example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiFileExample {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub files: Vec<ExampleFile>,
    /// Path of the file loaded by default; empty or unknown falls back to the first file
    #[serde(default, alias = "mainFile")]
    pub main_file: String,
}

impl MultiFileExample {
    /// File with an exact path match
    pub fn file(&self, path: &str) -> Option<&ExampleFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// File named by `main_file`, if it exists
    pub fn main_file_entry(&self) -> Option<&ExampleFile> {
        self.file(&self.main_file)
    }

    /// File named by `main_file`, else the first file
    pub fn resolved_main_file(&self) -> Option<&ExampleFile> {
        self.main_file_entry().or_else(|| self.files.first())
    }

    /// Content of the resolved main file, or "" when there are no files
    pub fn main_content(&self) -> &str {
        self.resolved_main_file()
            .map(|f| f.content.as_str())
            .unwrap_or("")
    }
}

/// Either example shape
///
/// Serialized without a tag. Deserialization picks the shape from the
/// presence of a `files` key and names the record on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyExample {
    Multi(MultiFileExample),
    Single(Example),
}

impl<'de> Deserialize<'de> for AnyExample {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let id = value
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("<no id>")
            .to_string();

        let parsed = if value.get("files").is_some() {
            serde_json::from_value(value).map(Self::Multi)
        } else {
            serde_json::from_value(value).map(Self::Single)
        };
        parsed.map_err(|e| D::Error::custom(format!("example '{id}': {e}")))
    }
}

impl AnyExample {
    pub fn id(&self) -> &str {
        match self {
            Self::Single(e) => &e.id,
            Self::Multi(m) => &m.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Single(e) => &e.title,
            Self::Multi(m) => &m.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Single(e) => &e.description,
            Self::Multi(m) => &m.description,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            Self::Single(e) => &e.category,
            Self::Multi(m) => &m.category,
        }
    }

    pub fn subcategory(&self) -> Option<&str> {
        match self {
            Self::Single(e) => e.subcategory.as_deref(),
            Self::Multi(m) => m.subcategory.as_deref(),
        }
    }

    pub fn is_multi_file(&self) -> bool {
        matches!(self, Self::Multi(_))
    }

    pub fn as_single(&self) -> Option<&Example> {
        match self {
            Self::Single(e) => Some(e),
            Self::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&MultiFileExample> {
        match self {
            Self::Multi(m) => Some(m),
            Self::Single(_) => None,
        }
    }

    /// Text to load into the editor
    ///
    /// Single-file: `code` verbatim. Multi-file: the main file, else the
    /// first file, else "".
    pub fn main_content(&self) -> &str {
        match self {
            Self::Single(e) => &e.code,
            Self::Multi(m) => m.main_content(),
        }
    }
}

impl From<Example> for AnyExample {
    fn from(example: Example) -> Self {
        Self::Single(example)
    }
}

impl From<MultiFileExample> for AnyExample {
    fn from(example: MultiFileExample) -> Self {
        Self::Multi(example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm_synth(main_file: &str, files: Vec<ExampleFile>) -> MultiFileExample {
        MultiFileExample {
            id: "fm-poly-synth".to_string(),
            title: "FM Poly Synth".to_string(),
            description: String::new(),
            category: "synths".to_string(),
            subcategory: Some("polyphonic".to_string()),
            files,
            main_file: main_file.to_string(),
        }
    }

    fn fm_files() -> Vec<ExampleFile> {
        vec![
            ExampleFile::new("main.cpp", "// main"),
            ExampleFile::new("voices/FMVoice.hpp", "// voice"),
        ]
    }

    #[test]
    fn main_content_uses_main_file() {
        let example = AnyExample::from(fm_synth("main.cpp", fm_files()));
        assert_eq!(example.main_content(), "// main");

        let example = AnyExample::from(fm_synth("voices/FMVoice.hpp", fm_files()));
        assert_eq!(example.main_content(), "// voice");
    }

    #[test]
    fn main_content_falls_back_to_first_file() {
        let multi = fm_synth("missing.cpp", fm_files());
        assert!(multi.main_file_entry().is_none());
        assert_eq!(multi.resolved_main_file().unwrap().path, "main.cpp");
        assert_eq!(AnyExample::from(multi).main_content(), "// main");
    }

    #[test]
    fn main_content_empty_when_no_files() {
        let example = AnyExample::from(fm_synth("main.cpp", Vec::new()));
        assert_eq!(example.main_content(), "");
    }

    #[test]
    fn single_file_main_content_is_code_verbatim() {
        let example = AnyExample::from(Example {
            id: "hello-sine".to_string(),
            title: "Hello Sine".to_string(),
            description: String::new(),
            category: "basics".to_string(),
            subcategory: None,
            code: "  line one\nline two\n".to_string(),
        });
        assert_eq!(example.main_content(), "  line one\nline two\n");
        assert!(!example.is_multi_file());
        assert!(example.as_multi().is_none());
        assert_eq!(example.subcategory(), None);
    }

    #[test]
    fn deserialize_discriminates_on_files() {
        let records: Vec<AnyExample> = serde_json::from_str(
            r#"[
                {"id": "a", "title": "A", "category": "basics", "code": "x"},
                {"id": "b", "title": "B", "category": "synths",
                 "files": [{"path": "main.cpp", "content": "y"}], "mainFile": "main.cpp"}
            ]"#,
        )
        .unwrap();

        assert!(!records[0].is_multi_file());
        assert!(records[1].is_multi_file());
        assert_eq!(records[1].main_content(), "y");
        assert_eq!(records[0].description(), "");
    }

    #[test]
    fn deserialize_record_with_files_and_code_is_multi() {
        let record: AnyExample = serde_json::from_str(
            r#"{"id": "c", "title": "C", "category": "synths", "code": "ignored",
                "files": [{"path": "a.cpp", "content": "z"}], "main_file": "a.cpp"}"#,
        )
        .unwrap();
        assert!(record.is_multi_file());
        assert_eq!(record.main_content(), "z");
    }

    #[test]
    fn deserialize_files_without_main_file_is_multi() {
        let record: AnyExample = serde_json::from_str(
            r#"{"id": "x", "title": "X", "category": "synths", "code": "c",
                "files": [{"path": "a.cpp", "content": "A"}]}"#,
        )
        .unwrap();
        let multi = record.as_multi().unwrap();
        assert_eq!(multi.main_file, "");
        assert!(multi.main_file_entry().is_none());
        assert_eq!(record.main_content(), "A");

        let record: AnyExample = serde_json::from_str(
            r#"{"id": "y", "title": "Y", "category": "synths",
                "files": [{"path": "b.cpp", "content": "B"}]}"#,
        )
        .unwrap();
        assert!(record.is_multi_file());
        assert_eq!(record.main_content(), "B");
    }

    #[test]
    fn deserialize_error_names_record() {
        let err = serde_json::from_str::<AnyExample>(
            r#"{"id": "half-done", "title": "Half", "category": "basics"}"#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("half-done"), "{message}");
        assert!(message.contains("code"), "{message}");

        let err = serde_json::from_str::<AnyExample>(
            r#"{"id": "bad-files", "title": "B", "category": "synths", "files": "main.cpp"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("bad-files"));
    }

    #[test]
    fn serialize_omits_missing_subcategory() {
        let example = AnyExample::from(Example {
            id: "kick".to_string(),
            title: "Kick".to_string(),
            description: String::new(),
            category: "drums".to_string(),
            subcategory: None,
            code: String::new(),
        });
        let json = serde_json::to_string(&example).unwrap();
        assert!(!json.contains("subcategory"));
    }
}
