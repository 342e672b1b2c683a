// TimeMap scoring pipeline.
//
// For every TimeMap in the collection, the first memento is prepared once
// and every memento of the TimeMap (the first included) is scored against
// it with the chosen measure. Results accumulate into a ScoreSheet, which
// may be one returned by an earlier run with a different measure.
//
// A memento whose content cannot be accessed is skipped with a warning.
// Every other failure aborts the run.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::sheet::ScoreSheet;
use crate::collection::traits::{Collection, CollectionError};
use crate::measures::traits::ScoreFunction;
use crate::text::prepare::{ContentPreparer, PrepareOptions};

/// Score every memento of every TimeMap against its TimeMap's first memento.
pub fn score_across_timemap(
    collection: &dyn Collection,
    preparer: &ContentPreparer,
    score_fn: &dyn ScoreFunction,
    scores: Option<ScoreSheet>,
    options: PrepareOptions,
) -> Result<ScoreSheet> {
    let measure = score_fn.measure();
    let mut sheet = scores.unwrap_or_default().into_builder();

    info!(%measure, "Computing score across TimeMaps, beginning TimeMap iteration...");

    let ids = collection
        .timemap_ids()
        .context("Failed to list TimeMaps in collection")?;
    let total = ids.len();

    let mut scored = 0usize;
    let mut skipped = 0usize;

    for (index, id) in ids.iter().enumerate() {
        info!("Processing TimeMap {} of {}", index + 1, total);
        debug!(timemap = %id, "Processing mementos from TimeMap");

        let timemap = collection
            .timemap(id)
            .with_context(|| format!("Failed to load TimeMap {id}"))?;

        sheet.ensure_timemap(id);

        // Some TimeMaps have no mementos at all
        if timemap.is_empty() {
            info!(timemap = %id, "TimeMap has no mementos, nothing to score");
            continue;
        }

        let first = timemap
            .first
            .as_ref()
            .with_context(|| format!("TimeMap {id} has mementos but no first memento"))?;

        debug!(uri = %first.uri, "Accessing content of first memento for calculations");

        let first_data = preparer
            .prepare(&first.uri, collection, options)
            .with_context(|| format!("Failed to prepare first memento {} of {id}", first.uri))?;

        let memento_total = timemap.len();
        info!("There are {} mementos in this TimeMap", memento_total);

        for (position, memento) in timemap.mementos.iter().enumerate() {
            info!("Processing memento {} of {}", position + 1, memento_total);
            debug!(uri = %memento.uri, "Accessing content of memento for calculations");

            sheet.ensure_memento(id, &memento.uri);

            match preparer.prepare(&memento.uri, collection, options) {
                Ok(data) => {
                    let record = score_fn.compute(&first_data, &data).with_context(|| {
                        format!("Failed to compute {measure} for memento {}", memento.uri)
                    })?;
                    sheet.record_score(id, &memento.uri, measure.name(), record);
                    scored += 1;
                }
                Err(CollectionError::MementoAccess { uri, reason }) => {
                    warn!(
                        uri = %uri,
                        %measure,
                        reason = %reason,
                        "Errors were recorded while attempting to access memento, skipping calculations for this memento"
                    );
                    skipped += 1;
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to access memento {}", memento.uri));
                }
            }
        }
    }

    info!(%measure, timemaps = total, scored, skipped, "Finished scoring across TimeMaps");

    Ok(sheet.build())
}
