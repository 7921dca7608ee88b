use crate::error::{AnalyzerError, Result};
use crate::pos::VerbPolicy;
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound on the number of source files a single run will parse.
pub const DEFAULT_MAX_FILES: usize = 100;

pub const DEFAULT_VERB_TOP_SIZE: usize = 3;
pub const DEFAULT_NAME_TOP_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Query {
    /// Most frequent verbs found in function names.
    Verbs,
    /// Most frequent function names.
    FunctionNames,
    /// Every word of every referenced name, unranked.
    Words,
    /// Most frequent words of referenced names.
    TopWords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Table,
    Json,
}

/// Everything a pipeline run needs. Built from a JSON file, CLI flags, or
/// directly by library callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub repo_path: PathBuf,
    /// `None` picks the query's own default.
    pub top_size: Option<usize>,
    pub max_files: usize,
    pub query: Query,
    pub verb_policy: VerbPolicy,
    pub lexicon_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            repo_path: PathBuf::from("."),
            top_size: None,
            max_files: DEFAULT_MAX_FILES,
            query: Query::Verbs,
            verb_policy: VerbPolicy::default(),
            lexicon_path: None,
            output: OutputFormat::Table,
        }
    }
}

impl AnalyzerConfig {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        AnalyzerConfig {
            repo_path: repo_path.into(),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn with_top_size(mut self, top_size: usize) -> Self {
        self.top_size = Some(top_size);
        self
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_verb_policy(mut self, verb_policy: VerbPolicy) -> Self {
        self.verb_policy = verb_policy;
        self
    }

    pub fn top_size(&self) -> usize {
        self.top_size.unwrap_or(match self.query {
            Query::Verbs => DEFAULT_VERB_TOP_SIZE,
            Query::FunctionNames | Query::Words | Query::TopWords => DEFAULT_NAME_TOP_SIZE,
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {:?}", path);
        let text = fs::read_to_string(path).map_err(|e| {
            AnalyzerError::io(format!("Failed to read config {}", path.display()), e)
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| AnalyzerError::config(format!("Invalid configuration: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = AnalyzerConfig::from_json_str(r#"{"repo_path": "/srv/app"}"#).unwrap();
        assert_eq!(config.repo_path, PathBuf::from("/srv/app"));
        assert_eq!(config.max_files, DEFAULT_MAX_FILES);
        assert_eq!(config.query, Query::Verbs);
        assert_eq!(config.verb_policy, VerbPolicy::BaseForm);
        assert_eq!(config.top_size(), DEFAULT_VERB_TOP_SIZE);
    }

    #[test]
    fn top_size_default_depends_on_query() {
        let config = AnalyzerConfig::new(".").with_query(Query::FunctionNames);
        assert_eq!(config.top_size(), DEFAULT_NAME_TOP_SIZE);
        assert_eq!(config.with_top_size(4).top_size(), 4);
    }

    #[test]
    fn kebab_case_enums() {
        let config = AnalyzerConfig::from_json_str(
            r#"{"query": "function-names", "verb_policy": "any-form", "output": "json"}"#,
        )
        .unwrap();
        assert_eq!(config.query, Query::FunctionNames);
        assert_eq!(config.verb_policy, VerbPolicy::AnyForm);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let err = AnalyzerConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, AnalyzerError::Config { .. }));
    }
}
