//! Crate error type and its CLI exit-code mapping.

use thiserror::Error;

use crate::validate::IntegrityViolation;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog integrity check failed with {} violation(s):\n{}", .violations.len(), format_violations(.violations))]
    Integrity { violations: Vec<IntegrityViolation> },

    #[error("Example not found: {id}")]
    ExampleNotFound { id: String },

    #[error("File not found in example '{example_id}': {path}")]
    FileNotFound { example_id: String, path: String },

    #[error("Failed to parse example source '{source_name}': {message}")]
    SourceParse {
        source_name: String,
        message: String,
    },

    #[error("Unsupported source format: {extension}")]
    UnsupportedSourceFormat { extension: String },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("Failed to parse config: {message}")]
    ConfigParse { message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ExampleNotFound { .. } => 2,
            Self::FileNotFound { .. } => 3,
            Self::Integrity { .. } => 4,
            Self::SourceParse { .. } | Self::UnsupportedSourceFormat { .. } => 5,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 6,
            _ => 1,
        }
    }
}

fn format_violations(violations: &[IntegrityViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}
