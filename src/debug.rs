// src/debug.rs
//! Per-call diagnostics. Raw input text never leaves this module; only a short hash does.

use serde::Serialize;

/// What one `process` call did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallStats {
    /// Anonymized input id (first 6 bytes of SHA-256, hex).
    pub input_id: String,
    /// Sentence units after segmentation, empty fragments included.
    pub sentences: usize,
    /// Sentences with no tagger result.
    pub skipped: usize,
    pub phrases: usize,
    pub emotions: usize,
    /// True if the output is the lone fallback exclamation.
    pub fallback: bool,
}

pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
