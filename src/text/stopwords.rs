// Stopword and punctuation filtering.
//
// Two English lists are available: the NLTK list (the default, short and
// conservative) and the much larger ISO list shipped with the `stop-words`
// crate. Lookups are case-insensitive.

use std::collections::HashSet;
use std::str::FromStr;

use stop_words::{get, LANGUAGE};

use super::tokenize::is_punctuation;

/// NLTK's English stopword corpus.
const NLTK_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Which English stopword list to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopwordList {
    #[default]
    Nltk,
    Iso,
}

impl FromStr for StopwordList {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nltk" => Ok(Self::Nltk),
            "iso" => Ok(Self::Iso),
            other => anyhow::bail!("Unknown stopword list '{other}' (expected nltk or iso)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercase stopwords
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(StopwordList::default())
    }
}

impl StopwordFilter {
    pub fn new(list: StopwordList) -> Self {
        let stopwords = match list {
            StopwordList::Nltk => NLTK_ENGLISH.iter().map(|w| w.to_string()).collect(),
            StopwordList::Iso => {
                let words: Vec<String> = get(LANGUAGE::English);
                words.into_iter().map(|w| w.to_lowercase()).collect()
            }
        };
        Self { stopwords }
    }

    /// A filter over a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// True when the token should be dropped: a stopword or pure punctuation.
    pub fn rejects(&self, token: &str) -> bool {
        is_punctuation(token) || self.is_stopword(token)
    }

    /// Keep tokens that are neither stopwords nor punctuation, in order.
    pub fn retain(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.rejects(t)).collect()
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
