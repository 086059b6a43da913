// src/metrics.rs
//! Pipeline counters. Recording is a no-op until the host installs a recorder.

use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;

use crate::debug::CallStats;

/// One-time metrics registration (so series show up with descriptions).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "dogeify_sentences_total",
            "Sentences seen after segmentation (empty fragments included)."
        );
        describe_counter!(
            "dogeify_sentences_skipped_total",
            "Sentences the tagger returned no result for."
        );
        describe_counter!("dogeify_phrases_total", "Intensifier phrases produced.");
        describe_counter!("dogeify_emotions_total", "Emotion exclamations emitted.");
        describe_counter!(
            "dogeify_fallback_total",
            "Calls that produced nothing and fell back to a lone emotion."
        );
    });
}

pub(crate) fn record_call(stats: &CallStats) {
    ensure_metrics_described();
    counter!("dogeify_sentences_total").increment(stats.sentences as u64);
    counter!("dogeify_sentences_skipped_total").increment(stats.skipped as u64);
    counter!("dogeify_phrases_total").increment(stats.phrases as u64);
    counter!("dogeify_emotions_total").increment(stats.emotions as u64);
    if stats.fallback {
        counter!("dogeify_fallback_total").increment(1);
    }
}
