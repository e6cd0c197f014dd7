//! Builtin Category Definitions
//!
//! Taxonomy compiled into the crate. Every built-in example points into it.

/// Static category group definitions, in dropdown order
pub const BUILTIN_GROUPS: &[BuiltinGroup] = &[
    BuiltinGroup {
        id: "core",
        title: "Core",
        categories: &[
            BuiltinCategory {
                id: "basics",
                title: "Basics",
                subcategories: &[
                    BuiltinSubcategory {
                        id: "hello-world",
                        title: "Hello World",
                    },
                    BuiltinSubcategory {
                        id: "controls",
                        title: "Controls",
                    },
                ],
            },
            BuiltinCategory {
                id: "oscillators",
                title: "Oscillators",
                subcategories: &[
                    BuiltinSubcategory {
                        id: "waveforms",
                        title: "Waveforms",
                    },
                    BuiltinSubcategory {
                        id: "fm",
                        title: "FM Synthesis",
                    },
                ],
            },
            BuiltinCategory {
                id: "effects",
                title: "Effects",
                subcategories: &[
                    BuiltinSubcategory {
                        id: "delay",
                        title: "Delay",
                    },
                    BuiltinSubcategory {
                        id: "filter",
                        title: "Filters",
                    },
                ],
            },
        ],
    },
    BuiltinGroup {
        id: "instruments",
        title: "Instruments",
        categories: &[
            BuiltinCategory {
                id: "synths",
                title: "Synthesizers",
                subcategories: &[BuiltinSubcategory {
                    id: "polyphonic",
                    title: "Polyphonic",
                }],
            },
            BuiltinCategory {
                id: "drums",
                title: "Drum Machines",
                subcategories: &[],
            },
        ],
    },
];

/// Static category group
#[derive(Debug, Clone)]
pub struct BuiltinGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub categories: &'static [BuiltinCategory],
}

/// Static category
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    pub id: &'static str,
    pub title: &'static str,
    /// Empty when the category has no subcategories
    pub subcategories: &'static [BuiltinSubcategory],
}

/// Static subcategory
#[derive(Debug, Clone)]
pub struct BuiltinSubcategory {
    pub id: &'static str,
    pub title: &'static str,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_groups_exist() {
        assert!(!BUILTIN_GROUPS.is_empty());
        assert!(BUILTIN_GROUPS.iter().any(|g| g.id == "core"));
        assert!(BUILTIN_GROUPS
            .iter()
            .flat_map(|g| g.categories)
            .any(|c| c.id == "basics"));
    }

    #[test]
    fn test_builtin_category_ids_unique() {
        let mut seen = HashSet::new();
        for category in BUILTIN_GROUPS.iter().flat_map(|g| g.categories) {
            assert!(seen.insert(category.id), "duplicate category {}", category.id);
        }
    }

    #[test]
    fn test_builtin_subcategory_ids_unique_per_category() {
        for category in BUILTIN_GROUPS.iter().flat_map(|g| g.categories) {
            let mut seen = HashSet::new();
            for sub in category.subcategories {
                assert!(seen.insert(sub.id), "duplicate subcategory {}", sub.id);
            }
        }
    }
}
