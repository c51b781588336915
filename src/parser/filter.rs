//! File name filtering for JSON discovery

use std::path::Path;

/// Case-sensitive file name check; `.JSON` does not count
pub fn has_json_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json"))
}
