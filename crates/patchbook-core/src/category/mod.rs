//! # Category Module
//!
//! Two-level taxonomy used to place examples in the editor's dropdown.
//!
//! ```text
//! CategoryGroup (product line)
//! └── Category
//!     └── Subcategory (optional)
//! ```
//!
//! - `builtin`: static hierarchy compiled into the crate
//! - `hierarchy`: runtime hierarchy with external categories merged in
//!
//! ## Example
//!
//! ```rust
//! use patchbook_core::category::CategoryHierarchy;
//!
//! let hierarchy = CategoryHierarchy::builtin();
//! assert_eq!(hierarchy.category_title("basics"), "Basics");
//! assert_eq!(hierarchy.subcategory_title("basics", "hello-world"), "Hello World");
//!
//! // Unknown ids come back unchanged
//! assert_eq!(hierarchy.category_title("nonexistent-id"), "nonexistent-id");
//! ```

mod builtin;
mod hierarchy;

pub use builtin::{BuiltinCategory, BuiltinGroup, BuiltinSubcategory, BUILTIN_GROUPS};
pub use hierarchy::{Category, CategoryGroup, CategoryHierarchy, Subcategory};
