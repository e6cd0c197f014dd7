//! # Example Module
//!
//! Single-file and multi-file example records, plus the local example set
//! compiled into the crate.

mod builtin;
mod types;

pub use builtin::{
    local_examples, local_multi_file_examples, BuiltinExample, BuiltinFile,
    BuiltinMultiFileExample, BUILTIN_EXAMPLES, BUILTIN_MULTI_FILE_EXAMPLES,
};
pub use types::{AnyExample, Example, ExampleFile, MultiFileExample};
