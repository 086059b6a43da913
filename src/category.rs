// src/category.rs
//! Part-of-speech tags (Penn Treebank subset) and their mapping onto the five
//! word categories that pick an intensifier pool.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Semantic word category used to choose an intensifier pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Adjective,
    SingularNoun,
    PluralNoun,
    InfinitiveVerb,
    Adverb,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Adjective,
        Category::SingularNoun,
        Category::PluralNoun,
        Category::InfinitiveVerb,
        Category::Adverb,
    ];
}

/// Raw tag as reported by a tagger.
///
/// Only the tags we consume get their own variant; everything else lands in
/// `Other` and maps to no category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// NN
    Noun,
    /// NNP
    ProperNoun,
    /// NNS
    PluralNoun,
    /// NNPS
    PluralProperNoun,
    /// JJ
    Adjective,
    /// JJR
    ComparativeAdjective,
    /// JJS
    SuperlativeAdjective,
    /// RBR
    ComparativeAdverb,
    /// RBS
    SuperlativeAdverb,
    /// VB
    BaseVerb,
    /// Any other tag, kept lower-cased for diagnostics.
    Other(String),
}

impl PosTag {
    /// Fixed tag → category lookup. `None` means the word is dropped.
    pub fn category(&self) -> Option<Category> {
        match self {
            PosTag::Adjective | PosTag::ComparativeAdjective | PosTag::SuperlativeAdjective => {
                Some(Category::Adjective)
            }
            PosTag::Noun | PosTag::ProperNoun => Some(Category::SingularNoun),
            PosTag::PluralNoun | PosTag::PluralProperNoun => Some(Category::PluralNoun),
            PosTag::ComparativeAdverb | PosTag::SuperlativeAdverb => Some(Category::Adverb),
            PosTag::BaseVerb => Some(Category::InfinitiveVerb),
            PosTag::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PosTag::Noun => "nn",
            PosTag::ProperNoun => "nnp",
            PosTag::PluralNoun => "nns",
            PosTag::PluralProperNoun => "nnps",
            PosTag::Adjective => "jj",
            PosTag::ComparativeAdjective => "jjr",
            PosTag::SuperlativeAdjective => "jjs",
            PosTag::ComparativeAdverb => "rbr",
            PosTag::SuperlativeAdverb => "rbs",
            PosTag::BaseVerb => "vb",
            PosTag::Other(s) => s.as_str(),
        }
    }
}

impl FromStr for PosTag {
    type Err = std::convert::Infallible;

    /// Case-insensitive; never fails, unknown tags become `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        Ok(match t.as_str() {
            "nn" => PosTag::Noun,
            "nnp" => PosTag::ProperNoun,
            "nns" => PosTag::PluralNoun,
            "nnps" => PosTag::PluralProperNoun,
            "jj" => PosTag::Adjective,
            "jjr" => PosTag::ComparativeAdjective,
            "jjs" => PosTag::SuperlativeAdjective,
            "rbr" => PosTag::ComparativeAdverb,
            "rbs" => PosTag::SuperlativeAdverb,
            "vb" => PosTag::BaseVerb,
            _ => PosTag::Other(t),
        })
    }
}

impl From<&str> for PosTag {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_tags() {
        let cases = [
            ("NN", Some(Category::SingularNoun)),
            ("nnp", Some(Category::SingularNoun)),
            ("NNS", Some(Category::PluralNoun)),
            ("NNPS", Some(Category::PluralNoun)),
            ("JJ", Some(Category::Adjective)),
            ("JJR", Some(Category::Adjective)),
            ("JJS", Some(Category::Adjective)),
            ("RBR", Some(Category::Adverb)),
            ("RBS", Some(Category::Adverb)),
            ("VB", Some(Category::InfinitiveVerb)),
        ];
        for (raw, want) in cases {
            assert_eq!(PosTag::from(raw).category(), want, "tag {raw}");
        }
    }

    #[test]
    fn unknown_and_unconsumed_tags_are_dropped() {
        for raw in ["RB", "VBZ", "VBP", "DT", "PRP", "xyz", ""] {
            let t = PosTag::from(raw);
            assert!(matches!(t, PosTag::Other(_)), "{raw} should be Other");
            assert_eq!(t.category(), None);
        }
    }

    #[test]
    fn display_round_trips_lowercase() {
        assert_eq!(PosTag::from("NNS").to_string(), "nns");
        assert_eq!(PosTag::from("VBZ").to_string(), "vbz");
    }
}
