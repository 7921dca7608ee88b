use super::{BASE_FORM_VERB_TAG, PosTagger};
use crate::error::{AnalyzerError, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_LEXICON: &str = include_str!("../../data/lexicon.txt");

const FALLBACK_TAG: &str = "NN";

/// Dictionary-backed tagger.
///
/// Known words get their listed tag. Unknown words are checked against
/// the base-form verbs with a few suffix rules (`-ing`, `-ed`, `-s`), then
/// fall back to `CD` for numerals and `NN` for everything else.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    entries: HashMap<String, String>,
}

impl LexiconTagger {
    /// The embedded lexicon. Fails only if `data/lexicon.txt` itself has a
    /// malformed line.
    pub fn builtin() -> Result<Self> {
        Self::from_lexicon(BUILTIN_LEXICON)
    }

    pub fn from_lexicon(text: &str) -> Result<Self> {
        let mut tagger = Self {
            entries: HashMap::new(),
        };
        tagger.merge(text)?;
        Ok(tagger)
    }

    /// The built-in lexicon with the entries of `path` layered on top.
    pub fn with_lexicon_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AnalyzerError::io(format!("Failed to read lexicon {}", path.display()), e)
        })?;

        let mut tagger = Self::builtin()?;
        let added = tagger.merge(&text)?;
        info!("Loaded {} lexicon entries from {:?}", added, path);
        Ok(tagger)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn merge(&mut self, text: &str) -> Result<usize> {
        let mut added = 0;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(word), Some(tag), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(AnalyzerError::Lexicon {
                    line: idx + 1,
                    message: format!("expected `word TAG`, got {:?}", line),
                });
            };

            if !tag.chars().all(|c| c.is_ascii_uppercase() || c == '$') {
                return Err(AnalyzerError::Lexicon {
                    line: idx + 1,
                    message: format!("invalid tag {:?}", tag),
                });
            }

            self.entries.insert(word.to_lowercase(), tag.to_string());
            added += 1;
        }

        debug!("Merged {} lexicon entries", added);
        Ok(added)
    }

    fn is_base_verb(&self, word: &str) -> bool {
        self.entries
            .get(word)
            .is_some_and(|tag| tag == BASE_FORM_VERB_TAG)
    }

    /// Any of the usual ways a suffix attaches to a stem: plain, with a
    /// dropped `e` restored, or with a doubled final consonant.
    fn has_base_stem(&self, stem: &str) -> bool {
        if stem.is_empty() {
            return false;
        }
        if self.is_base_verb(stem) || self.is_base_verb(&format!("{}e", stem)) {
            return true;
        }
        let bytes = stem.as_bytes();
        let n = bytes.len();
        n >= 2
            && bytes[n - 1].is_ascii()
            && bytes[n - 1] == bytes[n - 2]
            && self.is_base_verb(&stem[..n - 1])
    }

    fn inflection_tag(&self, word: &str) -> Option<&'static str> {
        if let Some(stem) = word.strip_suffix("ing") {
            if self.has_base_stem(stem) {
                return Some("VBG");
            }
        }
        if let Some(stem) = word.strip_suffix("ied") {
            if self.is_base_verb(&format!("{}y", stem)) {
                return Some("VBD");
            }
        }
        if let Some(stem) = word.strip_suffix("ed") {
            if self.has_base_stem(stem) || self.is_base_verb(&word[..word.len() - 1]) {
                return Some("VBD");
            }
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if self.is_base_verb(&format!("{}y", stem)) {
                return Some("VBZ");
            }
        }
        if let Some(stem) = word.strip_suffix("es") {
            if self.is_base_verb(stem) {
                return Some("VBZ");
            }
        }
        if let Some(stem) = word.strip_suffix('s') {
            if self.is_base_verb(stem) {
                return Some("VBZ");
            }
        }
        None
    }

    pub fn tag_word(&self, word: &str) -> String {
        let word = word.to_lowercase();

        if let Some(tag) = self.entries.get(&word) {
            return tag.clone();
        }
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
            return "CD".to_string();
        }
        self.inflection_tag(&word).unwrap_or(FALLBACK_TAG).to_string()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, words: &[&str]) -> Vec<(String, String)> {
        words
            .iter()
            .map(|word| (word.to_string(), self.tag_word(word)))
            .collect()
    }
}
