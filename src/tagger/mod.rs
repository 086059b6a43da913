// src/tagger/mod.rs
//! Part-of-speech tagging boundary.
//!
//! The pipeline only needs `Tagger::tag`: sentence in, `(word, tag)` pairs out,
//! or `None` when the tagger has nothing to say about the sentence. Two adapters ship here:
//! - `LexiconTagger`: bundled word list + suffix heuristics, no external process needed
//! - `MarkupTagger`: wraps anything that returns inline `<tag>word</tag>` markup

pub mod lexicon;

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

use crate::category::PosTag;

pub use lexicon::LexiconTagger;

/// One word with its raw tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub word: String,
    pub tag: PosTag,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<PosTag>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Tagging service used by the pipeline. Blocking and synchronous.
pub trait Tagger: Send + Sync {
    /// Tag a cleaned, lower-cased sentence. `None` = no taggable content.
    fn tag(&self, sentence: &str) -> Option<Vec<TaggedWord>>;

    /// Name for diagnostics.
    fn name(&self) -> &'static str {
        "tagger"
    }
}

impl<T: Tagger + ?Sized> Tagger for Arc<T> {
    fn tag(&self, sentence: &str) -> Option<Vec<TaggedWord>> {
        (**self).tag(sentence)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag(&self, sentence: &str) -> Option<Vec<TaggedWord>> {
        (**self).tag(sentence)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

static RE_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^<>/\s]+)>([^<]+?)</[^<>]+>").expect("markup regex"));

/// Parse inline tagger markup such as `<nns>dogs</nns> <vbp>are</vbp>`.
///
/// Text outside tagged spans is ignored. Tags are case-insensitive.
pub fn parse_markup(markup: &str) -> Vec<TaggedWord> {
    RE_MARKUP
        .captures_iter(markup)
        .filter_map(|caps| {
            let tag = caps.get(1)?.as_str();
            let word = caps.get(2)?.as_str().trim();
            if word.is_empty() {
                return None;
            }
            Some(TaggedWord::new(word, tag))
        })
        .collect()
}

/// Adapter for an external tagger that returns inline markup.
///
/// The closure gets the sentence and returns the markup, or `None` on failure.
/// Markup without any tagged span counts as "no result".
pub struct MarkupTagger<F> {
    call: F,
}

impl<F> MarkupTagger<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    pub fn new(call: F) -> Self {
        Self { call }
    }
}

impl<F> Tagger for MarkupTagger<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn tag(&self, sentence: &str) -> Option<Vec<TaggedWord>> {
        let markup = (self.call)(sentence)?;
        let words = parse_markup(&markup);
        if words.is_empty() {
            None
        } else {
            Some(words)
        }
    }

    fn name(&self) -> &'static str {
        "markup"
    }
}

impl<F> fmt::Debug for MarkupTagger<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkupTagger").finish_non_exhaustive()
    }
}
