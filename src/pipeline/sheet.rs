// Score sheet — the nested result of a scoring run.
//
//   timemaps -> TimeMap id -> memento URI -> measure name -> ScoreRecord
//
// A run builds it through `ScoreSheetBuilder` and hands back an immutable
// `ScoreSheet`. A finished sheet can be turned back into a builder so a
// later run with another measure adds to it without touching existing
// entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::measures::traits::ScoreRecord;

/// Scores for one memento, keyed by measure name.
pub type MementoScores = BTreeMap<String, ScoreRecord>;

/// Scores for one TimeMap, keyed by memento URI.
pub type TimeMapScores = BTreeMap<String, MementoScores>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    timemaps: BTreeMap<String, TimeMapScores>,
}

impl ScoreSheet {
    pub fn into_builder(self) -> ScoreSheetBuilder {
        ScoreSheetBuilder { sheet: self }
    }

    pub fn timemaps(&self) -> &BTreeMap<String, TimeMapScores> {
        &self.timemaps
    }

    pub fn timemap(&self, id: &str) -> Option<&TimeMapScores> {
        self.timemaps.get(id)
    }

    pub fn score(&self, id: &str, uri: &str, measure: &str) -> Option<&ScoreRecord> {
        self.timemaps.get(id)?.get(uri)?.get(measure)
    }

    pub fn is_empty(&self) -> bool {
        self.timemaps.is_empty()
    }

    pub fn timemap_count(&self) -> usize {
        self.timemaps.len()
    }

    pub fn memento_count(&self) -> usize {
        self.timemaps.values().map(|t| t.len()).sum()
    }

    /// Number of mementos holding a score for `measure`.
    pub fn score_count(&self, measure: &str) -> usize {
        self.timemaps
            .values()
            .flat_map(|t| t.values())
            .filter(|scores| scores.contains_key(measure))
            .count()
    }

    /// Measure names present anywhere in the sheet, sorted.
    pub fn measures(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .timemaps
            .values()
            .flat_map(|t| t.values())
            .flat_map(|scores| scores.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// `(TimeMap id, memento URI)` pairs that have no score for `measure`.
    pub fn missing(&self, measure: &str) -> Vec<(&str, &str)> {
        self.timemaps
            .iter()
            .flat_map(|(id, t)| t.iter().map(move |(uri, scores)| (id, uri, scores)))
            .filter(|(_, _, scores)| !scores.contains_key(measure))
            .map(|(id, uri, _)| (id.as_str(), uri.as_str()))
            .collect()
    }
}

/// Mutable view of a sheet while a run is in progress.
#[derive(Debug, Default)]
pub struct ScoreSheetBuilder {
    sheet: ScoreSheet,
}

impl ScoreSheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the TimeMap has an entry, even if it ends up empty.
    pub fn ensure_timemap(&mut self, id: &str) -> &mut TimeMapScores {
        self.sheet.timemaps.entry(id.to_string()).or_default()
    }

    /// Make sure the memento has an entry under its TimeMap.
    pub fn ensure_memento(&mut self, id: &str, uri: &str) -> &mut MementoScores {
        self.ensure_timemap(id).entry(uri.to_string()).or_default()
    }

    /// Store a score. Replaces an earlier score only for the same measure.
    pub fn record_score(&mut self, id: &str, uri: &str, measure: &str, record: ScoreRecord) {
        self.ensure_memento(id, uri)
            .insert(measure.to_string(), record);
    }

    pub fn build(self) -> ScoreSheet {
        self.sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_timemap_is_kept() {
        let mut builder = ScoreSheetBuilder::new();
        builder.ensure_timemap("t0");
        let sheet = builder.build();
        assert_eq!(sheet.timemap_count(), 1);
        assert!(sheet.timemap("t0").unwrap().is_empty());
    }

    #[test]
    fn test_merge_keeps_other_measures() {
        let mut builder = ScoreSheetBuilder::new();
        builder.record_score("t0", "m0", "bytecount", ScoreRecord::comparison(0.0));
        let sheet = builder.build();

        let mut builder = sheet.into_builder();
        builder.ensure_memento("t0", "m0");
        builder.record_score("t0", "m0", "jaccard", ScoreRecord::comparison(0.5));
        let sheet = builder.build();

        assert_eq!(sheet.score("t0", "m0", "bytecount").unwrap().comparison_score, 0.0);
        assert_eq!(sheet.score("t0", "m0", "jaccard").unwrap().comparison_score, 0.5);
        assert_eq!(sheet.measures(), vec!["bytecount", "jaccard"]);
    }

    #[test]
    fn test_missing_and_counts() {
        let mut builder = ScoreSheetBuilder::new();
        builder.record_score("t0", "m0", "jaccard", ScoreRecord::comparison(0.0));
        builder.ensure_memento("t0", "m1");
        builder.ensure_timemap("t1");
        let sheet = builder.build();

        assert_eq!(sheet.memento_count(), 2);
        assert_eq!(sheet.score_count("jaccard"), 1);
        assert_eq!(sheet.missing("jaccard"), vec![("t0", "m1")]);
    }

    #[test]
    fn test_json_shape() {
        let mut builder = ScoreSheetBuilder::new();
        builder.record_score(
            "t0",
            "m0",
            "wordcount",
            ScoreRecord::comparison(-0.5).with_individual(3),
        );
        builder.ensure_timemap("t1");
        let json = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(json["timemaps"]["t0"]["m0"]["wordcount"]["individual score"], 3);
        assert_eq!(json["timemaps"]["t1"], serde_json::json!({}));
    }
}
