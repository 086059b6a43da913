// src/emotion.rs
//! Emotion cadence: one exclamation after every chunk of up to three phrases.

use rand::Rng;

use crate::pool::Pool;
use crate::vocab::EMOTIONS;

/// Phrases per chunk before an emotion word is inserted.
pub const CHUNK_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct EmotionInjector {
    pool: Pool,
}

impl Default for EmotionInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionInjector {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(&EMOTIONS),
        }
    }

    pub fn remaining(&self) -> &[&'static str] {
        self.pool.remaining()
    }

    /// Next emotion as a standalone exclamation, e.g. `"wow."`.
    pub fn exclamation<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        format!("{}.", self.pool.draw(rng))
    }

    /// Interleave `phrases` with an exclamation after each chunk (a final partial chunk counts).
    ///
    /// No phrases → empty string, and the pool is left alone.
    pub fn inject<R, S>(&mut self, phrases: &[S], rng: &mut R) -> String
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        let mut parts: Vec<String> = Vec::with_capacity(phrases.len() + phrases.len() / CHUNK_SIZE + 1);
        for chunk in phrases.chunks(CHUNK_SIZE) {
            parts.extend(chunk.iter().map(|p| p.as_ref().to_string()));
            parts.push(self.exclamation(rng));
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_emotion(tok: &str) -> bool {
        tok.strip_suffix('.')
            .map(|w| EMOTIONS.contains(&w))
            .unwrap_or(false)
    }

    #[test]
    fn seven_phrases_get_three_emotions() {
        let mut r = StdRng::seed_from_u64(1);
        let mut inj = EmotionInjector::new();
        let phrases: Vec<String> = (1..=7).map(|i| format!("so w{i}.")).collect();
        let out = inj.inject(&phrases, &mut r);

        let toks: Vec<&str> = out.split(' ').collect();
        // 7 phrases * 2 tokens + 3 emotions
        assert_eq!(toks.len(), 17);
        let emotion_idx: Vec<usize> = toks
            .iter()
            .enumerate()
            .filter(|(_, t)| is_emotion(t))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(emotion_idx, vec![6, 13, 16]);
    }

    #[test]
    fn three_emotions_in_a_row_never_repeat() {
        let mut r = StdRng::seed_from_u64(9);
        let mut inj = EmotionInjector::new();
        let mut got: Vec<String> = (0..3).map(|_| inj.exclamation(&mut r)).collect();
        got.sort();
        assert_eq!(got, vec!["amaze.", "excite.", "wow."]);
        assert!(inj.remaining().is_empty());

        // Next draw refills.
        let again = inj.exclamation(&mut r);
        assert!(is_emotion(&again));
        assert_eq!(inj.remaining().len(), 2);
    }

    #[test]
    fn empty_input_draws_nothing() {
        let mut r = StdRng::seed_from_u64(3);
        let mut inj = EmotionInjector::new();
        let out = inj.inject::<_, String>(&[], &mut r);
        assert!(out.is_empty());
        assert_eq!(inj.remaining().len(), 3);
    }
}
