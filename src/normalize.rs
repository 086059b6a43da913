// src/normalize.rs
//! Text normalization and sentence segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[:"(){}]+"#).expect("noise regex"));
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static RE_TERMINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("terminal regex"));

/// Normalize text: drop bracket/quote/colon noise and apostrophes, collapse whitespace, trim.
///
/// Noise is replaced before whitespace is collapsed, so the function is idempotent.
pub fn normalize_text(s: &str) -> String {
    let out = RE_NOISE.replace_all(s, " ");
    let out = out.replace('\'', "");
    let out = RE_WS.replace_all(&out, " ");
    out.trim().to_string()
}

/// Lower-case and split on runs of `.`, `!`, `?`. Each unit is trimmed.
///
/// Empty fragments (e.g. after a trailing period) are kept; the assembler drops them.
pub fn split_sentences(normalized: &str) -> Vec<String> {
    let lower = normalized.to_lowercase();
    RE_TERMINAL
        .split(&lower)
        .map(|s| s.trim().to_string())
        .collect()
}
