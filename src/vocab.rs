// src/vocab.rs
//! Fixed word lists: intensifiers, emotions and the built-in ignore set.

use crate::category::Category;

/// The six base intensifiers. Order matters only for refills.
pub const ADJECTIVES: [&str; 6] = ["so", "such", "very", "much", "many", "how"];

/// Emotion exclamations appended after every chunk of phrases.
pub const EMOTIONS: [&str; 3] = ["wow", "amaze", "excite"];

/// Filler words dropped before tagging (on top of our own vocabulary).
pub const FILLER_WORDS: [&str; 5] = ["i", "im", "be", "do", "have"];

/// Candidate intensifiers per category (always a subset of `ADJECTIVES`).
pub fn candidates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Adjective => &["such", "many"],
        Category::SingularNoun | Category::PluralNoun | Category::InfinitiveVerb => &ADJECTIVES,
        Category::Adverb => &["such", "very", "much", "many", "how"],
    }
}

/// Built-in literal ignore words: fillers + intensifiers + emotions.
///
/// Keeps the pipeline from re-tagging its own vocabulary when it shows up in the input.
pub fn builtin_ignore_words() -> impl Iterator<Item = &'static str> {
    FILLER_WORDS
        .iter()
        .chain(ADJECTIVES.iter())
        .chain(EMOTIONS.iter())
        .copied()
}
