// The set of measures this crate knows, with their stable names and the
// content preparation each one uses by default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cosine::Cosine;
use super::count::{ByteCount, WordCount};
use super::distance::{Jaccard, Levenshtein, NormalizedLevenshtein, Sorensen};
use super::traits::ScoreFunction;
use crate::text::prepare::PrepareOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    ByteCount,
    WordCount,
    Jaccard,
    Sorensen,
    Levenshtein,
    #[serde(rename = "nlevenshtein")]
    NormalizedLevenshtein,
    Cosine,
}

impl Measure {
    pub const ALL: [Measure; 7] = [
        Measure::ByteCount,
        Measure::WordCount,
        Measure::Jaccard,
        Measure::Sorensen,
        Measure::Levenshtein,
        Measure::NormalizedLevenshtein,
        Measure::Cosine,
    ];

    /// Name used as the measure key in results.
    pub fn name(self) -> &'static str {
        match self {
            Measure::ByteCount => "bytecount",
            Measure::WordCount => "wordcount",
            Measure::Jaccard => "jaccard",
            Measure::Sorensen => "sorensen",
            Measure::Levenshtein => "levenshtein",
            Measure::NormalizedLevenshtein => "nlevenshtein",
            Measure::Cosine => "cosine",
        }
    }

    /// Whether the measure produces scores. Cosine is declared only.
    pub fn is_implemented(self) -> bool {
        self != Measure::Cosine
    }

    /// Preparation flags the measure's driver uses unless overridden.
    pub fn default_options(self) -> PrepareOptions {
        match self {
            Measure::ByteCount => PrepareOptions {
                tokenize: false,
                stemming: false,
                remove_boilerplate: false,
            },
            Measure::WordCount | Measure::Jaccard | Measure::Cosine => PrepareOptions {
                tokenize: true,
                stemming: true,
                remove_boilerplate: true,
            },
            Measure::Sorensen | Measure::Levenshtein | Measure::NormalizedLevenshtein => {
                PrepareOptions {
                    tokenize: false,
                    stemming: false,
                    remove_boilerplate: true,
                }
            }
        }
    }

    /// Whether callers may change `tokenize` for this measure.
    pub fn accepts_tokenize_override(self) -> bool {
        matches!(
            self,
            Measure::Jaccard
                | Measure::Sorensen
                | Measure::Levenshtein
                | Measure::NormalizedLevenshtein
        )
    }

    pub fn score_function(self) -> Box<dyn ScoreFunction> {
        match self {
            Measure::ByteCount => Box::new(ByteCount),
            Measure::WordCount => Box::new(WordCount),
            Measure::Jaccard => Box::new(Jaccard),
            Measure::Sorensen => Box::new(Sorensen),
            Measure::Levenshtein => Box::new(Levenshtein),
            Measure::NormalizedLevenshtein => Box::new(NormalizedLevenshtein),
            Measure::Cosine => Box::new(Cosine),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Measure {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Measure::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Measure::ALL.iter().map(|m| m.name()).collect();
                anyhow::anyhow!("Unknown measure '{s}' (expected one of: {})", names.join(", "))
            })
    }
}
