// src/ignore.rs
//! Ignore filter: drops literal stop-words and pattern matches from a sentence before tagging.
//!
//! Entries come in two shapes:
//! - a literal word, matched case-insensitively against whole tokens
//! - a regex pattern, removed from the rejoined sentence after literal filtering
//!
//! In config files (TOML/JSON) a literal is a plain string and a pattern is `{ pattern = "..." }`.
//! Anything else is rejected when deserializing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;

use crate::error::{DogeifyError, DogeifyResult};
use crate::vocab::builtin_ignore_words;

static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w'\-]+").expect("token regex"));
static RE_SINGLE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w'\-]+$").expect("single token regex"));

/// One caller-supplied ignore rule.
#[derive(Debug, Clone)]
pub enum IgnoreEntry {
    Word(String),
    Pattern(Regex),
}

impl IgnoreEntry {
    /// Literal entry. Must be one token, otherwise it could never match anything.
    ///
    /// Apostrophes are dropped the same way the normalizer drops them from input,
    /// so `"I'm"` matches the `im` token that reaches the filter.
    pub fn word(word: impl Into<String>) -> DogeifyResult<Self> {
        let word = word.into();
        let cleaned = word.trim().replace('\'', "");
        if !RE_SINGLE_TOKEN.is_match(&cleaned) {
            return Err(DogeifyError::InvalidIgnoreWord { word });
        }
        Ok(IgnoreEntry::Word(cleaned.to_lowercase()))
    }

    /// Regex entry, compiled eagerly.
    pub fn pattern(pattern: &str) -> DogeifyResult<Self> {
        Regex::new(pattern)
            .map(IgnoreEntry::Pattern)
            .map_err(|source| DogeifyError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }
}

impl From<Regex> for IgnoreEntry {
    fn from(re: Regex) -> Self {
        IgnoreEntry::Pattern(re)
    }
}

impl<'de> Deserialize<'de> for IgnoreEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntryVisitor)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = IgnoreEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"a literal word or a { pattern = "..." } table"#)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<IgnoreEntry, E> {
        IgnoreEntry::word(v).map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<IgnoreEntry, A::Error> {
        let mut pattern: Option<String> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "pattern" => {
                    if pattern.is_some() {
                        return Err(de::Error::duplicate_field("pattern"));
                    }
                    pattern = Some(map.next_value()?);
                }
                other => return Err(de::Error::unknown_field(other, &["pattern"])),
            }
        }
        let pattern = pattern.ok_or_else(|| de::Error::missing_field("pattern"))?;
        IgnoreEntry::pattern(&pattern).map_err(de::Error::custom)
    }
}

/// Effective ignore set for one invocation: built-ins ∪ configured ∪ per-call entries.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    words: HashSet<String>,
    patterns: Vec<Regex>,
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IgnoreSet {
    /// Fillers + intensifiers + emotions.
    pub fn builtin() -> Self {
        Self {
            words: builtin_ignore_words().map(str::to_string).collect(),
            patterns: Vec::new(),
        }
    }

    pub fn extend<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = &'a IgnoreEntry>,
    {
        for e in entries {
            match e {
                IgnoreEntry::Word(w) => {
                    self.words.insert(w.to_lowercase());
                }
                IgnoreEntry::Pattern(re) => self.patterns.push(re.clone()),
            }
        }
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Tokenize, drop literal matches, rejoin with single spaces, then strip pattern matches.
    pub fn filter(&self, sentence: &str) -> String {
        let kept: Vec<&str> = RE_TOKEN
            .find_iter(sentence)
            .map(|m| m.as_str())
            .filter(|tok| !self.contains_word(tok))
            .collect();
        let mut out = kept.join(" ");
        for re in &self.patterns {
            out = re.replace_all(&out, "").into_owned();
        }
        out
    }
}
