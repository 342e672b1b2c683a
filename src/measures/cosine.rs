// Cosine measure — declared but not implemented.
//
// The cosine driver returns an empty result without iterating the
// collection, so this function is never reached from the pipeline. Calling
// it directly is an error rather than a guessed formula.

use anyhow::Result;

use super::measure::Measure;
use super::traits::{ScoreFunction, ScoreRecord};
use crate::text::prepare::PreparedContent;

pub struct Cosine;

impl ScoreFunction for Cosine {
    fn measure(&self) -> Measure {
        Measure::Cosine
    }

    fn compute(&self, _first: &PreparedContent, _current: &PreparedContent) -> Result<ScoreRecord> {
        anyhow::bail!("The cosine measure is not implemented")
    }
}
