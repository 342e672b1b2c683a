// Size-based measures: byte count and word count.
//
// Both report the current memento's size as the individual score and the
// relative shrinkage against the first memento as the comparison score:
//
//   comparison = 1 - len(current) / len(first)
//
// Growth gives a negative score. Two empty inputs score 0. An empty first
// memento with non-empty current content has no defined ratio and is an
// error.

use anyhow::Result;

use super::measure::Measure;
use super::traits::{ScoreFunction, ScoreRecord};
use crate::text::prepare::PreparedContent;

/// Compute `1 - current/first`, rejecting an empty reference.
pub fn relative_change(first_len: usize, current_len: usize) -> Result<f64> {
    if first_len == 0 {
        if current_len == 0 {
            return Ok(0.0);
        }
        anyhow::bail!(
            "First memento is empty but current memento has length {current_len}; \
             relative change is undefined"
        );
    }
    Ok(1.0 - (current_len as f64 / first_len as f64))
}

/// Byte length of the content. Token lists are joined first.
pub struct ByteCount;

impl ScoreFunction for ByteCount {
    fn measure(&self) -> Measure {
        Measure::ByteCount
    }

    fn compute(&self, first: &PreparedContent, current: &PreparedContent) -> Result<ScoreRecord> {
        let first_len = first.joined().len();
        let current_len = current.joined().len();

        Ok(ScoreRecord::comparison(relative_change(first_len, current_len)?)
            .with_individual(current_len as u64))
    }
}

/// Number of tokens. Needs tokenized content.
pub struct WordCount;

impl ScoreFunction for WordCount {
    fn measure(&self) -> Measure {
        Measure::WordCount
    }

    fn compute(&self, first: &PreparedContent, current: &PreparedContent) -> Result<ScoreRecord> {
        let (PreparedContent::Tokens(first), PreparedContent::Tokens(current)) = (first, current)
        else {
            anyhow::bail!("Word count needs tokenized content");
        };

        Ok(
            ScoreRecord::comparison(relative_change(first.len(), current.len())?)
                .with_individual(current.len() as u64),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> PreparedContent {
        PreparedContent::Text(s.to_string())
    }

    fn tokens(words: &[&str]) -> PreparedContent {
        PreparedContent::Tokens(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_relative_change() {
        assert_eq!(relative_change(4, 4).unwrap(), 0.0);
        assert_eq!(relative_change(4, 1).unwrap(), 0.75);
        assert_eq!(relative_change(2, 3).unwrap(), -0.5);
        assert_eq!(relative_change(4, 0).unwrap(), 1.0);
        assert_eq!(relative_change(0, 0).unwrap(), 0.0);
        assert!(relative_change(0, 3).is_err());
    }

    #[test]
    fn test_bytecount_text() {
        let record = ByteCount.compute(&text("abcd"), &text("ab")).unwrap();
        assert_eq!(record.comparison_score, 0.5);
        assert_eq!(record.individual_score, Some(2));
    }

    #[test]
    fn test_bytecount_joins_tokens() {
        let record = ByteCount
            .compute(&tokens(&["cat", "sat"]), &tokens(&["cat"]))
            .unwrap();
        assert_eq!(record.comparison_score, 0.5);
        assert_eq!(record.individual_score, Some(3));
    }

    #[test]
    fn test_wordcount() {
        let record = WordCount
            .compute(&tokens(&["cat", "sat"]), &tokens(&["cat", "sat", "mat"]))
            .unwrap();
        assert_eq!(record.comparison_score, -0.5);
        assert_eq!(record.individual_score, Some(3));
    }

    #[test]
    fn test_wordcount_rejects_raw_text() {
        assert!(WordCount.compute(&text("a b"), &text("a b")).is_err());
    }

    #[test]
    fn test_empty_reference() {
        let record = WordCount.compute(&tokens(&[]), &tokens(&[])).unwrap();
        assert_eq!(record.comparison_score, 0.0);
        assert_eq!(record.individual_score, Some(0));
        assert!(ByteCount.compute(&text(""), &text("x")).is_err());
    }
}
