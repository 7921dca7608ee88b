pub mod config;
pub mod error;
pub mod indexing;
pub mod parsers;
pub mod pos;
pub mod ranking;
pub mod utils;

pub use config::{AnalyzerConfig, OutputFormat, Query};
pub use error::{AnalyzerError, Result};
pub use pos::{LexiconTagger, PosTagger, VerbClassifier, VerbPolicy};

use log::{debug, info};

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Ranking {
        title: String,
        entries: Vec<(String, usize)>,
    },
    Words(Vec<String>),
}

impl Report {
    pub fn len(&self) -> usize {
        match self {
            Report::Ranking { entries, .. } => entries.len(),
            Report::Words(words) => words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs the query selected in `config` against `config.repo_path`.
///
/// Files that cannot be read or parsed are left out of the statistics
/// without an error; only a missing root path fails the run.
pub fn run(config: &AnalyzerConfig, tagger: &dyn PosTagger) -> Result<Report> {
    info!(
        "Running {:?} query on {:?} (top {}, at most {} files)",
        config.query,
        config.repo_path,
        config.top_size(),
        config.max_files
    );
    debug!("Configuration: {:?}", config);

    let report = match config.query {
        Query::Verbs => Report::Ranking {
            title: "Top verbs:".to_string(),
            entries: indexing::pick_top_verbs(config, tagger)?,
        },
        Query::FunctionNames => Report::Ranking {
            title: "Top function names:".to_string(),
            entries: indexing::pick_top_function_names(config)?,
        },
        Query::TopWords => Report::Ranking {
            title: "Top words:".to_string(),
            entries: indexing::pick_top_words(config)?,
        },
        Query::Words => Report::Words(indexing::find_all_words(config)?),
    };

    info!("Analysis complete: {} entries", report.len());
    Ok(report)
}

/// Builds the tagger described by `config`: the built-in lexicon, extended
/// with `config.lexicon_path` when set.
pub fn tagger_for(config: &AnalyzerConfig) -> Result<LexiconTagger> {
    match &config.lexicon_path {
        Some(path) => LexiconTagger::with_lexicon_file(path),
        None => LexiconTagger::builtin(),
    }
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
