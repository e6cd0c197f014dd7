//! Referential integrity checks over an aggregated catalog.
//!
//! Nothing here changes how lookups behave. The policy only decides whether a
//! violation fails the build or is logged and kept for reporting.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::CategoryHierarchy;
use crate::example::AnyExample;

/// What to do with integrity violations at build time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrityPolicy {
    /// Log violations and keep building
    #[default]
    Lenient,
    /// Fail the build, reporting every violation
    Strict,
}

impl IntegrityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

impl std::fmt::Display for IntegrityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("duplicate example id '{id}'")]
    DuplicateId { id: String },

    #[error("category '{category}' is defined more than once")]
    DuplicateCategory { category: String },

    #[error("example '{example_id}' references unknown category '{category}'")]
    UnknownCategory { example_id: String, category: String },

    #[error(
        "example '{example_id}' references unknown subcategory '{subcategory}' in '{category}'"
    )]
    UnknownSubcategory {
        example_id: String,
        category: String,
        subcategory: String,
    },

    #[error("example '{example_id}' names main file '{main_file}' which is not among its files")]
    MissingMainFile {
        example_id: String,
        main_file: String,
    },

    #[error("example '{example_id}' has no files")]
    EmptyFiles { example_id: String },
}

impl IntegrityViolation {
    /// Example the violation is about, if any
    pub fn example_id(&self) -> Option<&str> {
        match self {
            Self::DuplicateId { id } => Some(id.as_str()),
            Self::DuplicateCategory { .. } => None,
            Self::UnknownCategory { example_id, .. }
            | Self::UnknownSubcategory { example_id, .. }
            | Self::MissingMainFile { example_id, .. }
            | Self::EmptyFiles { example_id } => Some(example_id.as_str()),
        }
    }
}

/// Collect every violation, hierarchy first, then examples in aggregation order
pub fn validate(hierarchy: &CategoryHierarchy, examples: &[AnyExample]) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();

    let mut category_ids = HashSet::new();
    for category in hierarchy.categories() {
        if !category_ids.insert(category.id.as_str()) {
            violations.push(IntegrityViolation::DuplicateCategory {
                category: category.id.clone(),
            });
        }
    }

    let mut example_ids = HashSet::new();
    for example in examples {
        if !example_ids.insert(example.id()) {
            violations.push(IntegrityViolation::DuplicateId {
                id: example.id().to_string(),
            });
        }

        match hierarchy.category(example.category()) {
            None => violations.push(IntegrityViolation::UnknownCategory {
                example_id: example.id().to_string(),
                category: example.category().to_string(),
            }),
            Some(category) => {
                if let Some(sub) = example.subcategory() {
                    if category.subcategory(sub).is_none() {
                        violations.push(IntegrityViolation::UnknownSubcategory {
                            example_id: example.id().to_string(),
                            category: example.category().to_string(),
                            subcategory: sub.to_string(),
                        });
                    }
                }
            }
        }

        if let AnyExample::Multi(multi) = example {
            if multi.files.is_empty() {
                violations.push(IntegrityViolation::EmptyFiles {
                    example_id: multi.id.clone(),
                });
            } else if multi.main_file_entry().is_none() {
                violations.push(IntegrityViolation::MissingMainFile {
                    example_id: multi.id.clone(),
                    main_file: multi.main_file.clone(),
                });
            }
        }
    }

    violations
}
