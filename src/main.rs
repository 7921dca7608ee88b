use clap::Parser;
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use verbtally::utils::io::write_report;
use verbtally::{
    AnalyzerConfig, OutputFormat, Query, Result, VerbPolicy, run, tagger_for, version,
};

/// Reports the most common verbs and names used in a Python codebase.
#[derive(Parser, Debug)]
#[command(name = "verbtally", version)]
struct Cli {
    /// Path to the repository to analyze [default: .]
    #[arg(short = 'p', long)]
    repo_path: Option<PathBuf>,

    /// How many entries to show [default: 3 for verbs, 10 otherwise]
    #[arg(short = 's', long)]
    size_of_top: Option<usize>,

    /// What to report [default: verbs]
    #[arg(short, long, value_enum)]
    query: Option<Query>,

    /// Maximum number of source files to parse [default: 100]
    #[arg(long)]
    max_files: Option<usize>,

    /// Count inflected verbs (fetched, loading, ...) and not only base forms
    #[arg(long)]
    any_verb_form: bool,

    /// Extra `word TAG` lexicon entries for the tagger
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Output format [default: table]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// JSON configuration file; explicit flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_json_file(path)?,
            None => AnalyzerConfig::default(),
        };

        if let Some(repo_path) = self.repo_path {
            config.repo_path = repo_path;
        }
        if let Some(top_size) = self.size_of_top {
            config.top_size = Some(top_size);
        }
        if let Some(query) = self.query {
            config.query = query;
        }
        if let Some(max_files) = self.max_files {
            config.max_files = max_files;
        }
        if self.any_verb_form {
            config.verb_policy = VerbPolicy::AnyForm;
        }
        if let Some(lexicon) = self.lexicon {
            config.lexicon_path = Some(lexicon);
        }
        if let Some(format) = self.format {
            config.output = format;
        }

        Ok(config)
    }
}

fn execute(config: &AnalyzerConfig) -> Result<()> {
    let tagger = tagger_for(config)?;
    let report = run(config, &tagger)?;
    write_report(&report, config.output, &mut io::stdout().lock())
}

fn main() -> ExitCode {
    // Initialize logger
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("verbtally v{}", version());
    info!("Analyzing: {:?}", config.repo_path);

    let start_time = Instant::now();

    if let Err(e) = execute(&config) {
        error!("Analysis failed: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Completed in {:.2?}", start_time.elapsed());
    ExitCode::SUCCESS
}
