use crate::error::{AnalyzerError, Result};
use crate::parsers::{PythonParser, SyntaxTree, is_source_file};
use log::{debug, info, trace};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How much context to keep next to each parsed tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeBuildOptions {
    pub with_file_names: bool,
    pub with_file_content: bool,
}

#[derive(Debug)]
pub enum ParsedSource {
    Tree(SyntaxTree),
    Named {
        path: PathBuf,
        tree: SyntaxTree,
    },
    Full {
        path: PathBuf,
        content: String,
        tree: SyntaxTree,
    },
}

impl ParsedSource {
    pub fn tree(&self) -> &SyntaxTree {
        match self {
            ParsedSource::Tree(tree) => tree,
            ParsedSource::Named { tree, .. } | ParsedSource::Full { tree, .. } => tree,
        }
    }

    pub fn into_tree(self) -> SyntaxTree {
        match self {
            ParsedSource::Tree(tree) => tree,
            ParsedSource::Named { tree, .. } | ParsedSource::Full { tree, .. } => tree,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ParsedSource::Tree(_) => None,
            ParsedSource::Named { path, .. } | ParsedSource::Full { path, .. } => Some(path),
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            ParsedSource::Full { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// Collects up to `max_files` Python files under `root_path`.
///
/// Entries are visited in file-name order so repeated runs see the same
/// files. Symbolic links are followed, and a file reached through several
/// links is listed once. Entries that cannot be read, including link loops,
/// are skipped. The cap is global: the walk stops as soon as `max_files`
/// paths have been collected.
pub fn discover_source_files(root_path: &Path, max_files: usize) -> Result<Vec<PathBuf>> {
    if !root_path.exists() {
        return Err(AnalyzerError::RootNotFound {
            path: root_path.to_path_buf(),
        });
    }

    info!("Scanning {:?} for source files (limit {})", root_path, max_files);

    let mut visited_files = HashSet::new();
    let mut files_to_process = Vec::new();

    if max_files == 0 {
        return Ok(files_to_process);
    }

    let entries = WalkDir::new(root_path)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                None
            }
        });

    for entry in entries {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        if !is_source_file(path) {
            trace!("Skipping non-source file: {:?}", path);
            continue;
        }

        let canonical_path = match fs::canonicalize(path) {
            Ok(p) => p,
            Err(e) => {
                debug!("Failed to canonicalize path {:?}: {}", path, e);
                continue;
            }
        };

        if !visited_files.insert(canonical_path) {
            trace!("Skipping already visited file: {:?}", path);
            continue;
        }

        files_to_process.push(path.to_path_buf());

        if files_to_process.len() >= max_files {
            debug!("Reached file limit of {}", max_files);
            break;
        }
    }

    info!("Found {} source files", files_to_process.len());
    Ok(files_to_process)
}

/// Reads and parses every path. Files that cannot be read as UTF-8 or that
/// do not parse are left out of the result; this is expected and not
/// reported as an error.
pub fn build_syntax_trees(
    paths: &[PathBuf],
    options: TreeBuildOptions,
) -> Result<Vec<ParsedSource>> {
    let mut parser = PythonParser::new()?;
    let mut parsed = Vec::with_capacity(paths.len());

    for path in paths {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Skipping unreadable file {:?}: {}", path, e);
                continue;
            }
        };

        let source = if options.with_file_names && options.with_file_content {
            Some(content.clone())
        } else {
            None
        };

        let Some(tree) = parser.parse(content) else {
            debug!("Skipping file with syntax errors: {:?}", path);
            continue;
        };

        parsed.push(match (options.with_file_names, source) {
            (true, Some(content)) => ParsedSource::Full {
                path: path.clone(),
                content,
                tree,
            },
            (true, None) => ParsedSource::Named {
                path: path.clone(),
                tree,
            },
            (false, _) => ParsedSource::Tree(tree),
        });
    }

    debug!("Parsed {} of {} files", parsed.len(), paths.len());
    Ok(parsed)
}

/// Discovers and parses the files under `root_path`, keeping only the trees.
pub fn create_syntax_trees(root_path: &Path, max_files: usize) -> Result<Vec<SyntaxTree>> {
    let paths = discover_source_files(root_path, max_files)?;
    let parsed = build_syntax_trees(&paths, TreeBuildOptions::default())?;
    Ok(parsed.into_iter().map(ParsedSource::into_tree).collect())
}

pub fn parse_source(source: &str) -> Result<Option<SyntaxTree>> {
    Ok(PythonParser::new()?.parse(source.to_string()))
}
