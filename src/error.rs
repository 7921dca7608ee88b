//! Error types for the analyzer.
//!
//! Only failures about the run's own inputs surface here: the root path, the
//! configuration, the lexicon and the grammar. Failures local to a single
//! source file are skipped by the pipeline and never become an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The directory to analyze does not exist.
    #[error("Path does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A lexicon file line that is not `word TAG`.
    #[error("Lexicon error on line {line}: {message}")]
    Lexicon { line: usize, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to load Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Invalid tree-sitter query: {0}")]
    Query(#[from] tree_sitter::QueryError),
}

impl AnalyzerError {
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        AnalyzerError::Io {
            message: message.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        AnalyzerError::Config {
            message: message.into(),
        }
    }
}
