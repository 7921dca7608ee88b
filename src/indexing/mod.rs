pub mod analyzer;
pub mod extractor;
pub mod processor;

pub use analyzer::{
    extract_verbs, find_all_names, find_all_words, find_function_names, pick_top_function_names,
    pick_top_verbs, pick_top_words, split_identifier,
};
pub use extractor::{ExtractionMode, NameExtractor, is_reserved_name};
pub use processor::{
    ParsedSource, TreeBuildOptions, build_syntax_trees, create_syntax_trees,
    discover_source_files, parse_source,
};
