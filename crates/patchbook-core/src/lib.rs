//! Example catalog for the patchbook editor.
//!
//! ```rust
//! use patchbook_core::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let hello = catalog.by_subcategory("basics", "hello-world");
//! assert_eq!(hello.len(), 3);
//!
//! let synth = catalog.get("fm-poly-synth").unwrap();
//! assert!(catalog.main_content(synth).contains("FMVoice"));
//! assert_eq!(catalog.category_title("nonexistent-id"), "nonexistent-id");
//! ```

pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod example;
pub mod source;
pub mod validate;

pub use catalog::{Catalog, CatalogBuilder, ExampleQuery, DEFAULT_LABEL_SEPARATOR};
pub use category::{
    BuiltinCategory, BuiltinGroup, BuiltinSubcategory, Category, CategoryGroup,
    CategoryHierarchy, Subcategory, BUILTIN_GROUPS,
};
pub use config::{CatalogConfig, Config, DisplayConfig, CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE};
pub use error::{CatalogError, Result};
pub use example::{
    local_examples, local_multi_file_examples, AnyExample, Example, ExampleFile,
    MultiFileExample, BUILTIN_EXAMPLES, BUILTIN_MULTI_FILE_EXAMPLES,
};
pub use source::{ExampleSource, ExternalSource, SourceFormat, StaticSource};
pub use validate::{validate, IntegrityPolicy, IntegrityViolation};
