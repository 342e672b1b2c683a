// Per-measure entry points.
//
// Each driver pins the content preparation its measure needs and forwards
// to `score_across_timemap`. Measures compared as raw text by default
// (Sørensen, Levenshtein, normalized Levenshtein) let callers switch
// tokenization on.

use anyhow::Result;
use tracing::info;

use super::sheet::ScoreSheet;
use super::timemap::score_across_timemap;
use crate::collection::traits::Collection;
use crate::measures::count::{ByteCount, WordCount};
use crate::measures::distance::{Jaccard, Levenshtein, NormalizedLevenshtein, Sorensen};
use crate::measures::measure::Measure;
use crate::text::prepare::{ContentPreparer, PrepareOptions};

/// Byte count over raw content: no tokenization, boilerplate kept.
pub fn compute_bytecount_across_timemap(
    collection: &dyn Collection,
    preparer: &ContentPreparer,
    scores: Option<ScoreSheet>,
) -> Result<ScoreSheet> {
    score_across_timemap(
        collection,
        preparer,
        &ByteCount,
        scores,
        Measure::ByteCount.default_options(),
    )
}

/// Word count over tokenized, boilerplate-free content.
pub fn compute_wordcount_across_timemap(
    collection: &dyn Collection,
    preparer: &ContentPreparer,
    scores: Option<ScoreSheet>,
    stemming: bool,
) -> Result<ScoreSheet> {
    let options = PrepareOptions {
        stemming,
        ..Measure::WordCount.default_options()
    };
    score_across_timemap(collection, preparer, &WordCount, scores, options)
}

pub fn compute_jaccard_across_timemap(
    collection: &dyn Collection,
    preparer: &ContentPreparer,
    scores: Option<ScoreSheet>,
    tokenize: bool,
    stemming: bool,
) -> Result<ScoreSheet> {
    let options = PrepareOptions {
        tokenize,
        stemming,
        ..Measure::Jaccard.default_options()
    };
    score_across_timemap(collection, preparer, &Jaccard, scores, options)
}

pub fn compute_sorensen_across_timemap(
    collection: &dyn Collection,
    preparer: &ContentPreparer,
    scores: Option<ScoreSheet>,
    tokenize: bool,
    stemming: bool,
) -> Result<ScoreSheet> {
    let options = PrepareOptions {
        tokenize,
        stemming,
        ..Measure::Sorensen.default_options()
    };
    score_across_timemap(collection, preparer, &Sorensen, scores, options)
}

pub fn compute_levenshtein_across_timemap(
    collection: &dyn Collection,
    preparer: &ContentPreparer,
    scores: Option<ScoreSheet>,
    tokenize: bool,
    stemming: bool,
) -> Result<ScoreSheet> {
    let options = PrepareOptions {
        tokenize,
        stemming,
        ..Measure::Levenshtein.default_options()
    };
    score_across_timemap(collection, preparer, &Levenshtein, scores, options)
}

pub fn compute_nlevenshtein_across_timemap(
    collection: &dyn Collection,
    preparer: &ContentPreparer,
    scores: Option<ScoreSheet>,
    tokenize: bool,
    stemming: bool,
) -> Result<ScoreSheet> {
    let options = PrepareOptions {
        tokenize,
        stemming,
        ..Measure::NormalizedLevenshtein.default_options()
    };
    score_across_timemap(collection, preparer, &NormalizedLevenshtein, scores, options)
}

/// Cosine is not implemented: returns an empty sheet without touching the
/// collection. Any sheet passed in is discarded.
pub fn compute_cosine_across_timemap(
    _collection: &dyn Collection,
    _preparer: &ContentPreparer,
    _scores: Option<ScoreSheet>,
    _stemming: bool,
) -> Result<ScoreSheet> {
    info!(measure = %Measure::Cosine, "Cosine measure is not implemented, returning empty scores");
    Ok(ScoreSheet::default())
}

/// Caller overrides for the flags a driver exposes. `None` keeps the
/// measure's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub tokenize: Option<bool>,
    pub stemming: Option<bool>,
}

/// Run the driver for `measure`, applying whichever overrides it accepts.
pub fn run_measure(
    collection: &dyn Collection,
    preparer: &ContentPreparer,
    measure: Measure,
    overrides: Overrides,
    scores: Option<ScoreSheet>,
) -> Result<ScoreSheet> {
    let defaults = measure.default_options();
    let tokenize = overrides.tokenize.unwrap_or(defaults.tokenize);
    let stemming = overrides.stemming.unwrap_or(defaults.stemming);

    match measure {
        Measure::ByteCount => compute_bytecount_across_timemap(collection, preparer, scores),
        Measure::WordCount => {
            compute_wordcount_across_timemap(collection, preparer, scores, stemming)
        }
        Measure::Jaccard => {
            compute_jaccard_across_timemap(collection, preparer, scores, tokenize, stemming)
        }
        Measure::Sorensen => {
            compute_sorensen_across_timemap(collection, preparer, scores, tokenize, stemming)
        }
        Measure::Levenshtein => {
            compute_levenshtein_across_timemap(collection, preparer, scores, tokenize, stemming)
        }
        Measure::NormalizedLevenshtein => {
            compute_nlevenshtein_across_timemap(collection, preparer, scores, tokenize, stemming)
        }
        Measure::Cosine => compute_cosine_across_timemap(collection, preparer, scores, stemming),
    }
}

/// Run several measures in sequence, merging into one sheet.
///
/// Cosine is skipped here: its driver would discard everything scored so
/// far.
pub fn score_all_measures(
    collection: &dyn Collection,
    preparer: &ContentPreparer,
    measures: &[Measure],
    overrides: Overrides,
    scores: Option<ScoreSheet>,
) -> Result<ScoreSheet> {
    let mut sheet = scores.unwrap_or_default();
    for &measure in measures.iter().filter(|m| m.is_implemented()) {
        sheet = run_measure(collection, preparer, measure, overrides, Some(sheet))?;
    }
    Ok(sheet)
}
