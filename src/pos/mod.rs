//! Part-of-speech tagging and verb detection.
//!
//! The tagger is an oracle behind [`PosTagger`]: given a list of words it
//! returns one `(word, tag)` pair per word, using Penn Treebank style tags.
//! [`VerbClassifier`] only relies on that contract, so any tagger can be
//! plugged in. [`LexiconTagger`] is the built-in one.

mod lexicon;

pub use lexicon::LexiconTagger;

use log::trace;
use serde::{Deserialize, Serialize};

/// Tag of a verb in its base (dictionary) form.
pub const BASE_FORM_VERB_TAG: &str = "VB";

pub trait PosTagger {
    /// Tags each word. Must be a pure function of its input for the
    /// duration of a run.
    fn tag(&self, words: &[&str]) -> Vec<(String, String)>;
}

/// Which tags count as a verb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbPolicy {
    /// Only the base form, tag `VB` exactly.
    #[default]
    BaseForm,
    /// Any tag of the verb family: `VB`, `VBD`, `VBG`, `VBN`, `VBP`, `VBZ`.
    AnyForm,
}

impl VerbPolicy {
    pub fn accepts(self, tag: &str) -> bool {
        match self {
            VerbPolicy::BaseForm => tag == BASE_FORM_VERB_TAG,
            VerbPolicy::AnyForm => tag.starts_with(BASE_FORM_VERB_TAG),
        }
    }
}

pub struct VerbClassifier<'t> {
    tagger: &'t dyn PosTagger,
    policy: VerbPolicy,
}

impl<'t> VerbClassifier<'t> {
    pub fn new(tagger: &'t dyn PosTagger, policy: VerbPolicy) -> Self {
        Self { tagger, policy }
    }

    pub fn is_verb(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let tagged = self.tagger.tag(&[word]);
        match tagged.first() {
            Some((_, tag)) => {
                trace!("Tagged {:?} as {}", word, tag);
                self.policy.accepts(tag)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingTagger {
        calls: Cell<usize>,
    }

    impl PosTagger for CountingTagger {
        fn tag(&self, words: &[&str]) -> Vec<(String, String)> {
            self.calls.set(self.calls.get() + 1);
            words
                .iter()
                .map(|w| {
                    let tag = match *w {
                        "fetch" => "VB",
                        "fetched" => "VBD",
                        _ => "NN",
                    };
                    (w.to_string(), tag.to_string())
                })
                .collect()
        }
    }

    struct SilentTagger;

    impl PosTagger for SilentTagger {
        fn tag(&self, _words: &[&str]) -> Vec<(String, String)> {
            Vec::new()
        }
    }

    #[test]
    fn empty_word_never_reaches_the_oracle() {
        let tagger = CountingTagger { calls: Cell::new(0) };
        let classifier = VerbClassifier::new(&tagger, VerbPolicy::BaseForm);
        assert!(!classifier.is_verb(""));
        assert_eq!(tagger.calls.get(), 0);

        assert!(classifier.is_verb("fetch"));
        assert_eq!(tagger.calls.get(), 1);
    }

    #[test]
    fn base_form_policy_rejects_inflections() {
        let tagger = CountingTagger { calls: Cell::new(0) };
        let classifier = VerbClassifier::new(&tagger, VerbPolicy::BaseForm);
        assert!(classifier.is_verb("fetch"));
        assert!(!classifier.is_verb("fetched"));
        assert!(!classifier.is_verb("user"));
    }

    #[test]
    fn any_form_policy_accepts_inflections() {
        let tagger = CountingTagger { calls: Cell::new(0) };
        let classifier = VerbClassifier::new(&tagger, VerbPolicy::AnyForm);
        assert!(classifier.is_verb("fetch"));
        assert!(classifier.is_verb("fetched"));
        assert!(!classifier.is_verb("user"));
    }

    #[test]
    fn missing_tag_is_not_a_verb() {
        let classifier = VerbClassifier::new(&SilentTagger, VerbPolicy::AnyForm);
        assert!(!classifier.is_verb("fetch"));
    }
}
