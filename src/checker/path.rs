//! Location strings for keys and array elements inside a document

/// Location of `key` under `parent`: `parent.key`, or `key` at the root.
pub fn key_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Location of element `index` under `parent`: `parent[i]`, or `[i]` at the root.
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
