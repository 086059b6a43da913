// src/pipeline.rs
//! The doge pipeline.
//! Order:
//! 1) normalize + split into sentences
//! 2) per sentence: ignore filter → tagger → category → intensifier + respelling → emotion cadence
//! 3) join non-empty sentences, or fall back to a single emotion
//!
//! Pool state (intensifiers, per-category pools, emotions) lives on the `Dogeify` instance and
//! carries over between calls. `process` takes `&mut self`; to share one instance across
//! threads wrap it in a `DogeifyHandle`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

use crate::config::DogeifyConfig;
use crate::debug::{anon_hash, CallStats};
use crate::emotion::{EmotionInjector, CHUNK_SIZE};
use crate::error::{DogeifyError, DogeifyResult};
use crate::ignore::{IgnoreEntry, IgnoreSet};
use crate::normalize::{normalize_text, split_sentences};
use crate::pool::AdjectiveSelector;
use crate::respell::respell;
use crate::tagger::{LexiconTagger, Tagger};

/// Per-call options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessOptions {
    /// Extra words/patterns to drop before tagging, for this call only.
    pub ignore: Vec<IgnoreEntry>,
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(mut self, entry: IgnoreEntry) -> Self {
        self.ignore.push(entry);
        self
    }

    pub fn ignore_word(self, word: &str) -> DogeifyResult<Self> {
        Ok(self.ignore(IgnoreEntry::word(word)?))
    }

    pub fn ignore_pattern(self, pattern: &str) -> DogeifyResult<Self> {
        Ok(self.ignore(IgnoreEntry::pattern(pattern)?))
    }

    /// Parse `{"ignore": ["word", {"pattern": "..."}]}`.
    pub fn from_json(s: &str) -> DogeifyResult<Self> {
        serde_json::from_str(s).map_err(|e| DogeifyError::InvalidOptions(e.to_string()))
    }

    /// Parse `ignore = ["word", { pattern = "..." }]`.
    pub fn from_toml_str(s: &str) -> DogeifyResult<Self> {
        toml::from_str(s).map_err(|e| DogeifyError::InvalidOptions(e.to_string()))
    }
}

pub struct Dogeify {
    tagger: Box<dyn Tagger>,
    selector: AdjectiveSelector,
    emotions: EmotionInjector,
    ignore: Vec<IgnoreEntry>,
    rng: StdRng,
}

impl Default for Dogeify {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dogeify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dogeify")
            .field("tagger", &self.tagger.name())
            .field("selector", &self.selector)
            .field("emotions", &self.emotions)
            .field("ignore", &self.ignore.len())
            .finish_non_exhaustive()
    }
}

impl Dogeify {
    /// Bundled lexicon tagger, OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_tagger(LexiconTagger::new())
    }

    pub fn with_tagger<T: Tagger + 'static>(tagger: T) -> Self {
        Self {
            tagger: Box::new(tagger),
            selector: AdjectiveSelector::new(),
            emotions: EmotionInjector::new(),
            ignore: Vec::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reseed the RNG; same seed + same calls = same output.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Ignore entries applied on every call.
    pub fn with_ignore<I: IntoIterator<Item = IgnoreEntry>>(mut self, entries: I) -> Self {
        self.ignore.extend(entries);
        self
    }

    /// Build from config: extra lexicon, instance ignore list, optional seed.
    pub fn from_config(cfg: &DogeifyConfig) -> anyhow::Result<Self> {
        let tagger = match &cfg.lexicon_path {
            Some(p) => LexiconTagger::from_path(p)?,
            None => LexiconTagger::new(),
        };
        let mut d = Self::with_tagger(tagger).with_ignore(cfg.ignore.iter().cloned());
        if let Some(seed) = cfg.seed {
            d = d.seeded(seed);
        }
        Ok(d)
    }

    pub fn selector(&self) -> &AdjectiveSelector {
        &self.selector
    }

    pub fn emotions(&self) -> &EmotionInjector {
        &self.emotions
    }

    /// Rewrite `text` in doge. Never fails; worst case is a lone `"<emotion>."`.
    pub fn process(&mut self, text: &str, options: &ProcessOptions) -> String {
        self.process_with_stats(text, options).0
    }

    /// Same as `process`, plus counters for what happened.
    pub fn process_with_stats(&mut self, text: &str, options: &ProcessOptions) -> (String, CallStats) {
        let mut stats = CallStats {
            input_id: anon_hash(text),
            ..CallStats::default()
        };

        let mut ignore = IgnoreSet::builtin();
        ignore.extend(&self.ignore);
        ignore.extend(&options.ignore);

        let sentences = split_sentences(&normalize_text(text));
        stats.sentences = sentences.len();

        let mut parts: Vec<String> = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            if let Some(out) = self.translate_sentence(sentence, &ignore, &mut stats) {
                parts.push(out);
            }
        }

        let joined = parts
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let output = if joined.is_empty() {
            stats.fallback = true;
            stats.emotions += 1;
            self.emotions.exclamation(&mut self.rng)
        } else {
            joined
        };

        debug!(
            target: "dogeify",
            id = %stats.input_id,
            sentences = stats.sentences,
            skipped = stats.skipped,
            phrases = stats.phrases,
            emotions = stats.emotions,
            fallback = stats.fallback,
            "processed"
        );
        crate::metrics::record_call(&stats);

        (output, stats)
    }

    /// One sentence → phrases with emotions. `None` when the tagger has no result.
    fn translate_sentence(
        &mut self,
        sentence: &str,
        ignore: &IgnoreSet,
        stats: &mut CallStats,
    ) -> Option<String> {
        let cleaned = ignore.filter(sentence);
        let tagged = if cleaned.trim().is_empty() {
            None
        } else {
            self.tagger.tag(&cleaned)
        };
        let Some(tagged) = tagged else {
            stats.skipped += 1;
            trace!(target: "dogeify", id = %stats.input_id, tagger = self.tagger.name(), "no tagger result, skipping sentence");
            return None;
        };

        let mut phrases: Vec<String> = Vec::new();
        for tw in tagged {
            let Some(category) = tw.tag.category() else {
                continue;
            };
            let adjective = self.selector.select(category, &mut self.rng);
            phrases.push(format!("{adjective} {}.", respell(&tw.word)));
        }

        stats.phrases += phrases.len();
        stats.emotions += phrases.len().div_ceil(CHUNK_SIZE);
        Some(self.emotions.inject(&phrases, &mut self.rng))
    }
}

/* ----------------------------
Thread-safe handle
---------------------------- */

/// Cloneable handle that serializes `process` calls on one shared instance.
#[derive(Clone, Debug)]
pub struct DogeifyHandle {
    inner: Arc<Mutex<Dogeify>>,
}

impl DogeifyHandle {
    pub fn new(dogeify: Dogeify) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dogeify)),
        }
    }

    pub fn process(&self, text: &str, options: &ProcessOptions) -> String {
        // Pool state stays usable even if another caller panicked mid-call.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.process(text, options)
    }
}
