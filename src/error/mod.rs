//! Error types for scanning folders and checking individual JSON files

use std::fmt;
use std::path::PathBuf;

/// Errors raised while locating the folder to scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Folder '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Errors raised while loading a single JSON file
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Error reading file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("JSON parse error: {0}")]
    Parse(ParseError),
}

impl FileError {
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read { path, source }
    }

    pub fn decode(path: PathBuf, source: std::str::Utf8Error) -> Self {
        Self::Decode { path, source }
    }
}

impl From<ParseError> for FileError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }

    /// Build from a serde_json error, keeping its line and column.
    pub fn from_json(err: &serde_json::Error) -> Self {
        // serde_json reports line 0 for errors that are not tied to input
        let location = if err.line() > 0 {
            Some((err.line(), err.column()))
        } else {
            None
        };
        Self::new(err.to_string(), location)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // serde_json already appends "at line X column Y" to its messages
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Result type for scanning operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Result type for per-file operations
pub type FileResult<T> = Result<T, FileError>;
