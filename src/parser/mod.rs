//! Loading JSON files and running the naming checks on them

pub mod directory;
pub mod filter;

use crate::checker::{check_document, Issue};
use crate::error::{FileError, FileResult, ParseError};
use serde_json::Value;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Check one file, turning any load failure into a single issue.
pub fn check_file(path: &Path) -> Vec<Issue> {
    match load_document(path) {
        Ok(value) => check_document(&value, path),
        Err(err) => {
            tracing::debug!(file = %path.display(), error = %err, "failed to load JSON file");
            vec![Issue::new(path, err.to_string())]
        }
    }
}

/// Read and parse a JSON file (UTF-8, optional BOM)
pub fn load_document(path: &Path) -> FileResult<Value> {
    let bytes = std::fs::read(path).map_err(|e| FileError::read(path.to_path_buf(), e))?;
    let content = decode_utf8(&bytes).map_err(|e| FileError::decode(path.to_path_buf(), e))?;
    Ok(parse_document(content)?)
}

/// Decode UTF-8 text, dropping one leading byte-order mark
pub fn decode_utf8(bytes: &[u8]) -> Result<&str, std::str::Utf8Error> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes)
}

/// Parse JSON text into a document
pub fn parse_document(content: &str) -> Result<Value, ParseError> {
    serde_json::from_str(content).map_err(|e| ParseError::from_json(&e))
}
