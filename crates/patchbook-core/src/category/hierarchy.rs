//! Category Hierarchy
//!
//! Runtime taxonomy. Built from the builtin tables, optionally extended with
//! categories supplied by external example sources.

use serde::{Deserialize, Serialize};

use super::builtin::{BuiltinCategory, BuiltinGroup, BuiltinSubcategory, BUILTIN_GROUPS};

/// Top-level grouping of categories (e.g. a product line)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Named bucket of examples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<Subcategory>,
}

/// Leaf refinement of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub title: String,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subcategories: Vec::new(),
        }
    }

    /// Add a subcategory
    pub fn with_subcategory(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.subcategories.push(Subcategory {
            id: id.into(),
            title: title.into(),
        });
        self
    }

    pub fn subcategory(&self, id: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }
}

impl From<&BuiltinSubcategory> for Subcategory {
    fn from(builtin: &BuiltinSubcategory) -> Self {
        Self {
            id: builtin.id.to_string(),
            title: builtin.title.to_string(),
        }
    }
}

impl From<&BuiltinCategory> for Category {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            id: builtin.id.to_string(),
            title: builtin.title.to_string(),
            subcategories: builtin.subcategories.iter().map(Subcategory::from).collect(),
        }
    }
}

impl From<&BuiltinGroup> for CategoryGroup {
    fn from(builtin: &BuiltinGroup) -> Self {
        Self {
            id: builtin.id.to_string(),
            title: builtin.title.to_string(),
            categories: builtin.categories.iter().map(Category::from).collect(),
        }
    }
}

/// Ordered category groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHierarchy {
    groups: Vec<CategoryGroup>,
}

impl CategoryHierarchy {
    pub fn new(groups: Vec<CategoryGroup>) -> Self {
        Self { groups }
    }

    /// Hierarchy built from the builtin tables
    pub fn builtin() -> Self {
        Self::new(BUILTIN_GROUPS.iter().map(CategoryGroup::from).collect())
    }

    /// Merge categories into a group.
    ///
    /// - Existing group id: categories are appended to it
    /// - Unknown group id: a new group is pushed at the end
    pub fn merge_group(&mut self, id: &str, title: &str, categories: Vec<Category>) {
        if categories.is_empty() {
            return;
        }
        match self.groups.iter_mut().find(|g| g.id == id) {
            Some(group) => group.categories.extend(categories),
            None => self.groups.push(CategoryGroup {
                id: id.to_string(),
                title: title.to_string(),
                categories,
            }),
        }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// All categories, group order then category order
    pub fn categories(&self) -> Vec<&Category> {
        self.groups.iter().flat_map(|g| g.categories.iter()).collect()
    }

    /// First category with this id, in flattened order
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.groups
            .iter()
            .flat_map(|g| g.categories.iter())
            .find(|c| c.id == id)
    }

    pub fn subcategory(&self, category_id: &str, subcategory_id: &str) -> Option<&Subcategory> {
        self.category(category_id)
            .and_then(|c| c.subcategory(subcategory_id))
    }

    /// Group containing the category
    pub fn group_of(&self, category_id: &str) -> Option<&CategoryGroup> {
        self.groups
            .iter()
            .find(|g| g.categories.iter().any(|c| c.id == category_id))
    }

    /// Display title, or the id itself when unknown
    pub fn category_title<'a>(&'a self, category_id: &'a str) -> &'a str {
        self.category(category_id)
            .map(|c| c.title.as_str())
            .unwrap_or(category_id)
    }

    /// Display title scoped to the category, or the subcategory id when either is unknown
    pub fn subcategory_title<'a>(&'a self, category_id: &str, subcategory_id: &'a str) -> &'a str {
        self.subcategory(category_id, subcategory_id)
            .map(|s| s.title.as_str())
            .unwrap_or(subcategory_id)
    }
}
