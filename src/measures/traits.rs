// Score function trait — one implementation per measure.
//
// A score function is pure: the same two prepared inputs always give the
// same record. The pipeline never needs to know which measure it holds.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::measure::Measure;
use crate::text::prepare::PreparedContent;

/// The result of comparing one memento against the first memento.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Divergence of the current memento from the first memento
    #[serde(rename = "comparison score")]
    pub comparison_score: f64,
    /// Size of the current memento alone, for measures that have one
    #[serde(
        rename = "individual score",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub individual_score: Option<u64>,
}

impl ScoreRecord {
    pub fn comparison(score: f64) -> Self {
        Self {
            comparison_score: score,
            individual_score: None,
        }
    }

    pub fn with_individual(mut self, score: u64) -> Self {
        self.individual_score = Some(score);
        self
    }
}

/// Trait for comparing prepared memento content.
pub trait ScoreFunction {
    /// The measure this function computes.
    fn measure(&self) -> Measure;

    /// Score `current` against `first`, the TimeMap's reference memento.
    fn compute(&self, first: &PreparedContent, current: &PreparedContent) -> Result<ScoreRecord>;
}
