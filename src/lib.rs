//! Slug naming checker for JSON files
//!
//! Scans a folder for JSON files and reports object keys that are not made of
//! lowercase letters, digits and hyphens. Documents whose root is an array
//! also have their direct string elements checked as slugs.

pub mod checker;
pub mod cli;
pub mod error;
pub mod naming;
pub mod parser;
pub mod report;

// Re-export commonly used types
pub use checker::{check_document, check_value, Issue};
pub use error::{FileError, ParseError, ScanError};
pub use naming::{is_valid_name, ALLOWED_EXCEPTIONS};
pub use parser::{check_file, directory::find_json_files};
pub use report::{RunStatistics, ValidationRun};
