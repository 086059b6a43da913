// src/respell.rs
//! Phonetic respelling applied to every content word.
//!
//! Rules run in a fixed order, each on the previous rule's output, once per word.

use once_cell::sync::Lazy;
use regex::Regex;

static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"er$", "ar"),                      // super => supar
        (r"ph", "f"),                        // phone => fone
        (r"cious", "shus"),                  // delicious => delishus
        (r"([^s])tion(s$)?", "${1}shun${2}"), // emotions => emoshuns, question untouched
        (r"stion$", "schun"),                // question => queschun
        (r"dog([^e]|\b)", "doge${1}"),       // dogs => doges, doge untouched
    ]
    .into_iter()
    .map(|(pat, rep)| (Regex::new(pat).expect("respell regex"), rep))
    .collect()
});

/// Respell one word.
pub fn respell(word: &str) -> String {
    let mut out = word.to_string();
    for (re, rep) in RULES.iter() {
        out = re.replace_all(&out, *rep).into_owned();
    }
    out
}
