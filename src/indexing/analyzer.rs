use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::indexing::extractor::{ExtractionMode, NameExtractor};
use crate::indexing::processor::create_syntax_trees;
use crate::pos::{PosTagger, VerbClassifier};
use crate::ranking::pick_top;
use log::{debug, info};

/// Splits a snake_case identifier into its words. Empty segments from
/// leading, trailing or repeated underscores are dropped.
pub fn split_identifier(name: &str) -> Vec<String> {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn extract_verbs(function_name: &str, classifier: &VerbClassifier) -> Vec<String> {
    split_identifier(function_name)
        .into_iter()
        .filter(|word| classifier.is_verb(word))
        .collect()
}

fn collect_names(config: &AnalyzerConfig, mode: ExtractionMode) -> Result<Vec<String>> {
    let trees = create_syntax_trees(&config.repo_path, config.max_files)?;
    info!("Extracting {:?} from {} syntax trees", mode, trees.len());

    let extractor = NameExtractor::new()?;
    let names: Vec<String> = trees
        .iter()
        .flat_map(|tree| extractor.extract(tree, mode))
        .collect();

    debug!("Collected {} names", names.len());
    Ok(names)
}

pub fn find_function_names(config: &AnalyzerConfig) -> Result<Vec<String>> {
    collect_names(config, ExtractionMode::FunctionNames)
}

pub fn find_all_names(config: &AnalyzerConfig) -> Result<Vec<String>> {
    collect_names(config, ExtractionMode::AllNames)
}

/// Every word of every referenced name, in traversal order, unranked.
pub fn find_all_words(config: &AnalyzerConfig) -> Result<Vec<String>> {
    Ok(find_all_names(config)?
        .iter()
        .flat_map(|name| split_identifier(name))
        .collect())
}

pub fn pick_top_function_names(config: &AnalyzerConfig) -> Result<Vec<(String, usize)>> {
    let func_names = find_function_names(config)?;
    Ok(pick_top(func_names, config.top_size()))
}

pub fn pick_top_verbs(
    config: &AnalyzerConfig,
    tagger: &dyn PosTagger,
) -> Result<Vec<(String, usize)>> {
    let func_names = find_function_names(config)?;
    let classifier = VerbClassifier::new(tagger, config.verb_policy);

    let verbs: Vec<String> = func_names
        .iter()
        .flat_map(|name| extract_verbs(name, &classifier))
        .collect();

    debug!(
        "Found {} verbs in {} function names",
        verbs.len(),
        func_names.len()
    );
    Ok(pick_top(verbs, config.top_size()))
}

pub fn pick_top_words(config: &AnalyzerConfig) -> Result<Vec<(String, usize)>> {
    let words = find_all_words(config)?;
    Ok(pick_top(words, config.top_size()))
}
