use std::path::Path;

/// Extension of the files the analyzer parses.
pub const SOURCE_EXTENSION: &str = "py";

pub fn is_source_file(file_path: &Path) -> bool {
    file_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == SOURCE_EXTENSION)
}
