//! Aggregated example catalog
//!
//! `CatalogBuilder` assembles the hierarchy and every example source once.
//! The resulting `Catalog` is immutable and answers all lookups the editor
//! needs. Aggregation order is fixed:
//!
//! ```text
//! local single-file ++ external sources (registration order) ++ local multi-file
//! ```

use glob::Pattern;
use tracing::{debug, warn};

use crate::category::{Category, CategoryGroup, CategoryHierarchy};
use crate::error::{CatalogError, Result};
use crate::example::{local_examples, local_multi_file_examples, AnyExample};
use crate::source::ExampleSource;
use crate::validate::{validate, IntegrityPolicy, IntegrityViolation};

/// Separator used by `Catalog::label` callers that have no preference
pub const DEFAULT_LABEL_SEPARATOR: &str = " / ";

/// One-shot assembler for a `Catalog`
pub struct CatalogBuilder {
    hierarchy: CategoryHierarchy,
    local: Vec<AnyExample>,
    local_multi_file: Vec<AnyExample>,
    sources: Vec<Box<dyn ExampleSource>>,
    policy: IntegrityPolicy,
}

impl CatalogBuilder {
    /// Builder seeded with the builtin hierarchy and local examples
    pub fn new() -> Self {
        Self {
            hierarchy: CategoryHierarchy::builtin(),
            local: local_examples(),
            local_multi_file: local_multi_file_examples(),
            sources: Vec::new(),
            policy: IntegrityPolicy::default(),
        }
    }

    /// Builder with no hierarchy and no examples
    pub fn empty() -> Self {
        Self {
            hierarchy: CategoryHierarchy::default(),
            local: Vec::new(),
            local_multi_file: Vec::new(),
            sources: Vec::new(),
            policy: IntegrityPolicy::default(),
        }
    }

    pub fn with_hierarchy(mut self, hierarchy: CategoryHierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    /// Replace the local single-file set (placed first)
    pub fn with_local_examples(mut self, examples: Vec<AnyExample>) -> Self {
        self.local = examples;
        self
    }

    /// Replace the local multi-file set (placed last)
    pub fn with_local_multi_file_examples(mut self, examples: Vec<AnyExample>) -> Self {
        self.local_multi_file = examples;
        self
    }

    /// Register an external source; registration order is aggregation order
    pub fn with_source(mut self, source: impl ExampleSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn with_policy(mut self, policy: IntegrityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Merge, aggregate and check integrity according to the policy
    pub fn build(self) -> Result<Catalog> {
        let Self {
            mut hierarchy,
            local,
            local_multi_file,
            sources,
            policy,
        } = self;

        let mut examples = local;
        for source in &sources {
            let (group_id, group_title) = source.group();
            hierarchy.merge_group(group_id, group_title, source.categories());

            let supplied = source.examples();
            debug!(
                source = source.name(),
                examples = supplied.len(),
                "merged example source"
            );
            examples.extend(supplied);
        }
        examples.extend(local_multi_file);

        let violations = validate(&hierarchy, &examples);
        if !violations.is_empty() {
            match policy {
                IntegrityPolicy::Strict => {
                    return Err(CatalogError::Integrity { violations });
                }
                IntegrityPolicy::Lenient => {
                    for violation in &violations {
                        warn!(%violation, "catalog integrity");
                    }
                }
            }
        }

        debug!(
            examples = examples.len(),
            groups = hierarchy.groups().len(),
            sources = sources.len(),
            %policy,
            "catalog built"
        );

        Ok(Catalog {
            hierarchy,
            examples,
            violations,
        })
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter combining category, subcategory and an id glob
#[derive(Debug, Clone, Default)]
pub struct ExampleQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    /// Glob matched against example ids (e.g. `hello-*`)
    pub id_pattern: Option<String>,
}

impl ExampleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn id_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.id_pattern = Some(pattern.into());
        self
    }
}

/// Immutable, aggregated example collection
#[derive(Debug, Clone)]
pub struct Catalog {
    hierarchy: CategoryHierarchy,
    examples: Vec<AnyExample>,
    violations: Vec<IntegrityViolation>,
}

impl Catalog {
    /// Builtin hierarchy and local examples only
    pub fn builtin() -> Result<Self> {
        CatalogBuilder::new().build()
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// All examples in aggregation order
    pub fn examples(&self) -> &[AnyExample] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn hierarchy(&self) -> &CategoryHierarchy {
        &self.hierarchy
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        self.hierarchy.groups()
    }

    /// Flattened categories, group order then category order
    pub fn categories(&self) -> Vec<&Category> {
        self.hierarchy.categories()
    }

    /// First example with this id in aggregation order
    pub fn get(&self, id: &str) -> Option<&AnyExample> {
        self.examples.iter().find(|e| e.id() == id)
    }

    /// Examples in a category, in aggregation order
    pub fn by_category(&self, category_id: &str) -> Vec<&AnyExample> {
        self.examples
            .iter()
            .filter(|e| e.category() == category_id)
            .collect()
    }

    /// Examples in a category and subcategory; examples without a
    /// subcategory never match
    pub fn by_subcategory(&self, category_id: &str, subcategory_id: &str) -> Vec<&AnyExample> {
        self.examples
            .iter()
            .filter(|e| e.category() == category_id && e.subcategory() == Some(subcategory_id))
            .collect()
    }

    /// Text to load into the editor for this example
    pub fn main_content<'a>(&self, example: &'a AnyExample) -> &'a str {
        example.main_content()
    }

    pub fn category_title<'a>(&'a self, category_id: &'a str) -> &'a str {
        self.hierarchy.category_title(category_id)
    }

    pub fn subcategory_title<'a>(&'a self, category_id: &str, subcategory_id: &'a str) -> &'a str {
        self.hierarchy.subcategory_title(category_id, subcategory_id)
    }

    /// "Category / Subcategory" display label, or just the category title
    pub fn label(&self, example: &AnyExample, separator: &str) -> String {
        let category = self.category_title(example.category());
        match example.subcategory() {
            Some(sub) => format!(
                "{}{}{}",
                category,
                separator,
                self.subcategory_title(example.category(), sub)
            ),
            None => category.to_string(),
        }
    }

    /// Examples matching every set field of the query
    pub fn query(&self, query: &ExampleQuery) -> Result<Vec<&AnyExample>> {
        let pattern = query.id_pattern.as_deref().map(Pattern::new).transpose()?;

        Ok(self
            .examples
            .iter()
            .filter(|e| {
                query
                    .category
                    .as_deref()
                    .map_or(true, |c| e.category() == c)
            })
            .filter(|e| {
                query
                    .subcategory
                    .as_deref()
                    .map_or(true, |s| e.subcategory() == Some(s))
            })
            .filter(|e| pattern.as_ref().map_or(true, |p| p.matches(e.id())))
            .collect())
    }

    /// Integrity violations found at build time (empty under a strict build)
    pub fn report(&self) -> &[IntegrityViolation] {
        &self.violations
    }
}
