// Sequence distances: Jaccard, Sørensen–Dice, Levenshtein.
//
// Each works over any sequence of comparable units. Raw text is compared
// character by character, token lists token by token. Set distances treat
// the inputs as sets, so repeated units count once.

use std::collections::HashSet;
use std::hash::Hash;

use anyhow::Result;

use super::measure::Measure;
use super::traits::{ScoreFunction, ScoreRecord};
use crate::text::prepare::PreparedContent;

fn set_sizes<T: Eq + Hash>(a: &[T], b: &[T]) -> (usize, usize, usize) {
    let a: HashSet<&T> = a.iter().collect();
    let b: HashSet<&T> = b.iter().collect();
    (a.len(), b.len(), a.intersection(&b).count())
}

/// Jaccard distance: `1 - |A ∩ B| / |A ∪ B|`. Two empty inputs are 0.
pub fn jaccard<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let (len_a, len_b, shared) = set_sizes(a, b);
    let union = len_a + len_b - shared;
    if union == 0 {
        return 0.0;
    }
    1.0 - shared as f64 / union as f64
}

/// Sørensen–Dice distance: `1 - 2|A ∩ B| / (|A| + |B|)`. Two empty inputs
/// are 0.
pub fn sorensen<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let (len_a, len_b, shared) = set_sizes(a, b);
    if len_a + len_b == 0 {
        return 0.0;
    }
    1.0 - (2 * shared) as f64 / (len_a + len_b) as f64
}

/// Edit distance (insertions, deletions, substitutions all cost 1).
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, x) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            let cost = usize::from(x != y);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Edit distance divided by the longer length, in [0, 1].
pub fn normalized_levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / longest as f64
}

/// Apply a distance to two prepared inputs of the same kind.
fn compare(
    first: &PreparedContent,
    current: &PreparedContent,
    over_chars: fn(&[char], &[char]) -> f64,
    over_tokens: fn(&[String], &[String]) -> f64,
) -> Result<f64> {
    match (first, current) {
        (PreparedContent::Text(a), PreparedContent::Text(b)) => {
            let a: Vec<char> = a.chars().collect();
            let b: Vec<char> = b.chars().collect();
            Ok(over_chars(&a, &b))
        }
        (PreparedContent::Tokens(a), PreparedContent::Tokens(b)) => Ok(over_tokens(a, b)),
        _ => anyhow::bail!("Cannot compare raw text with a token list"),
    }
}

pub struct Jaccard;

impl ScoreFunction for Jaccard {
    fn measure(&self) -> Measure {
        Measure::Jaccard
    }

    fn compute(&self, first: &PreparedContent, current: &PreparedContent) -> Result<ScoreRecord> {
        compare(first, current, jaccard, jaccard).map(ScoreRecord::comparison)
    }
}

pub struct Sorensen;

impl ScoreFunction for Sorensen {
    fn measure(&self) -> Measure {
        Measure::Sorensen
    }

    fn compute(&self, first: &PreparedContent, current: &PreparedContent) -> Result<ScoreRecord> {
        compare(first, current, sorensen, sorensen).map(ScoreRecord::comparison)
    }
}

pub struct Levenshtein;

impl ScoreFunction for Levenshtein {
    fn measure(&self) -> Measure {
        Measure::Levenshtein
    }

    fn compute(&self, first: &PreparedContent, current: &PreparedContent) -> Result<ScoreRecord> {
        compare(
            first,
            current,
            |a, b| levenshtein(a, b) as f64,
            |a, b| levenshtein(a, b) as f64,
        )
        .map(ScoreRecord::comparison)
    }
}

pub struct NormalizedLevenshtein;

impl ScoreFunction for NormalizedLevenshtein {
    fn measure(&self) -> Measure {
        Measure::NormalizedLevenshtein
    }

    fn compute(&self, first: &PreparedContent, current: &PreparedContent) -> Result<ScoreRecord> {
        compare(first, current, normalized_levenshtein, normalized_levenshtein)
            .map(ScoreRecord::comparison)
    }
}
