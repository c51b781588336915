//! Recursive key naming checks over a parsed JSON document
//!
//! Object keys are always checked. String values are only checked when they
//! are direct elements of a document whose root is an array (a slug list).

pub mod path;

use crate::naming::is_valid_name;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single naming or loading problem found in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file: PathBuf,
    pub description: String,
}

impl Issue {
    pub fn new(file: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Check `value` and everything below it, starting at location `path`.
///
/// `is_top_level_array` only applies to the direct elements of `value`;
/// every nested level is checked with it cleared.
pub fn check_value(value: &Value, file: &Path, path: &str, is_top_level_array: bool) -> Vec<Issue> {
    let mut checker = StructureChecker::new(file);
    checker.check(value, path, is_top_level_array);
    checker.into_issues()
}

/// Check a whole document; the slug-list rule is derived from the root type.
pub fn check_document(value: &Value, file: &Path) -> Vec<Issue> {
    check_value(value, file, "", value.is_array())
}

/// Walks a document and collects issues for one file
pub struct StructureChecker<'a> {
    file: &'a Path,
    issues: Vec<Issue>,
}

impl<'a> StructureChecker<'a> {
    pub fn new(file: &'a Path) -> Self {
        Self {
            file,
            issues: Vec::new(),
        }
    }

    pub fn check(&mut self, value: &Value, path: &str, is_top_level_array: bool) {
        match value {
            Value::Object(object) => self.check_object(object, path),
            Value::Array(array) => self.check_array(array, path, is_top_level_array),
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
        }
    }

    fn check_object(&mut self, object: &Map<String, Value>, path: &str) {
        for (key, value) in object {
            let current = path::key_path(path, key);
            if !is_valid_name(key) {
                self.push(format!("Invalid key '{}' at {}", key, current));
            }
            self.check(value, &current, false);
        }
    }

    fn check_array(&mut self, array: &[Value], path: &str, is_top_level_array: bool) {
        for (index, item) in array.iter().enumerate() {
            let current = path::index_path(path, index);
            match item {
                Value::String(s) => {
                    if is_top_level_array && !is_valid_name(s) {
                        self.push(format!("Invalid string '{}' at {}", s, current));
                    }
                }
                other => self.check(other, &current, false),
            }
        }
    }

    fn push(&mut self, description: String) {
        self.issues.push(Issue::new(self.file, description));
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}
