// src/tagger/lexicon.rs
//! Bundled lexicon tagger.
//!
//! Lookup order per token:
//! 1) extra entries merged at construction (from config)
//! 2) the embedded `pos_lexicon.json` (word → Penn tags, first tag is the default reading)
//! 3) suffix heuristics for unknown words
//!
//! One contextual rule on top: right after `to` or a modal, a word that has a `VB`
//! reading is tagged `VB` ("want to run", "will fly").

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{TaggedWord, Tagger};
use crate::category::PosTag;

static LEXICON: Lazy<HashMap<String, Vec<String>>> = Lazy::new(|| {
    let raw = include_str!("../../pos_lexicon.json");
    serde_json::from_str::<HashMap<String, Vec<String>>>(raw).expect("valid pos lexicon")
});

static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w'\-]+").expect("word regex"));

const ADJECTIVE_SUFFIXES: [&str; 9] = ["ous", "ful", "ive", "able", "ible", "less", "ic", "al", "ish"];

#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    extra: HashMap<String, Vec<String>>,
}

/// A lexicon file entry: either one tag or a list (first = default reading).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagList {
    One(String),
    Many(Vec<String>),
}

impl TagList {
    fn into_vec(self) -> Vec<String> {
        match self {
            TagList::One(t) => vec![t],
            TagList::Many(v) => v,
        }
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or override entries. Words and tags are stored lower/upper-cased respectively.
    pub fn with_entries<I, W, T>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (W, Vec<T>)>,
        W: AsRef<str>,
        T: AsRef<str>,
    {
        for (word, tags) in entries {
            let tags: Vec<String> = tags
                .iter()
                .map(|t| t.as_ref().trim().to_ascii_uppercase())
                .filter(|t| !t.is_empty())
                .collect();
            if tags.is_empty() {
                continue;
            }
            self.extra.insert(word.as_ref().trim().to_lowercase(), tags);
        }
        self
    }

    /// Load extra entries from a JSON or TOML file (`word = "NN"` or `word = ["VBP", "VB"]`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let entries = parse_entries(&content, &ext)
            .with_context(|| format!("parsing lexicon {}", path.display()))?;
        Ok(Self::new().with_entries(entries))
    }

    /// All readings for `word`, default first.
    pub fn readings(&self, word: &str) -> Vec<PosTag> {
        let w = word.to_lowercase();
        if let Some(tags) = self.extra.get(&w).or_else(|| LEXICON.get(&w)) {
            return tags.iter().map(|t| PosTag::from(t.as_str())).collect();
        }
        vec![PosTag::from(guess_tag(&w))]
    }

    fn is_modal_or_to(&self, word: &str) -> bool {
        word.eq_ignore_ascii_case("to")
            || self
                .readings(word)
                .first()
                .is_some_and(|t| t.as_str() == "md")
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Option<Vec<TaggedWord>> {
        let tokens: Vec<&str> = RE_WORD.find_iter(sentence).map(|m| m.as_str()).collect();
        if tokens.is_empty() {
            return None;
        }

        let mut out = Vec::with_capacity(tokens.len());
        for (i, tok) in tokens.iter().enumerate() {
            let readings = self.readings(tok);
            let after_to_or_modal = i > 0 && self.is_modal_or_to(tokens[i - 1]);
            let tag = if after_to_or_modal && readings.contains(&PosTag::BaseVerb) {
                PosTag::BaseVerb
            } else {
                readings
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| PosTag::from("NN"))
            };
            out.push(TaggedWord {
                word: (*tok).to_string(),
                tag,
            });
        }
        Some(out)
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

// --- internals ---

/// Suffix heuristics for words missing from the lexicon (input is lower-cased).
fn guess_tag(w: &str) -> &'static str {
    let len = w.chars().count();
    if w.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '-') {
        return "CD";
    }
    if len > 3 && w.ends_with("ly") {
        return "RB";
    }
    if len > 4 && w.ends_with("ing") {
        return "VBG";
    }
    if len > 3 && w.ends_with("ed") {
        return "VBD";
    }
    if len > 4 && w.ends_with("est") {
        return "JJS";
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| w.ends_with(s)) {
        return "JJ";
    }
    if len > 3 && w.ends_with('s') && !(w.ends_with("ss") || w.ends_with("us") || w.ends_with("is")) {
        return "NNS";
    }
    "NN"
}

fn parse_entries(s: &str, hint_ext: &str) -> Result<Vec<(String, Vec<String>)>> {
    let try_toml = hint_ext == "toml";
    if try_toml {
        if let Ok(v) = toml::from_str::<HashMap<String, TagList>>(s) {
            return Ok(flatten(v));
        }
    }
    if let Ok(v) = serde_json::from_str::<HashMap<String, TagList>>(s) {
        return Ok(flatten(v));
    }
    if !try_toml {
        if let Ok(v) = toml::from_str::<HashMap<String, TagList>>(s) {
            return Ok(flatten(v));
        }
    }
    Err(anyhow!("unsupported lexicon format"))
}

fn flatten(map: HashMap<String, TagList>) -> Vec<(String, Vec<String>)> {
    map.into_iter().map(|(w, t)| (w, t.into_vec())).collect()
}
