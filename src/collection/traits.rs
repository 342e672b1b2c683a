// Collection trait — the swap-ready abstraction over archived content.
//
// Every call may fail. A failure to reach one memento's content is reported
// as `CollectionError::MementoAccess`, which the scoring pipeline treats as
// recoverable for that memento only. Anything else is `Other` and aborts
// the run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors returned by a collection.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    /// The content of a single memento could not be retrieved.
    #[error("memento {uri} could not be accessed: {reason}")]
    MementoAccess { uri: String, reason: String },

    /// Any other failure (unknown series, unreadable manifest, I/O).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CollectionError {
    pub fn memento_access(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MementoAccess {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    pub fn is_memento_access(&self) -> bool {
        matches!(self, Self::MementoAccess { .. })
    }
}

/// A single archived capture inside a TimeMap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MementoEntry {
    pub uri: String,
    /// Memento-Datetime, when the collection knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<Utc>>,
}

impl MementoEntry {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            datetime: None,
        }
    }
}

/// The time-ordered mementos of one original resource.
///
/// `first` is the reference point every memento is compared against. A
/// TimeMap with no mementos is valid and has no `first`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeMap {
    pub first: Option<MementoEntry>,
    pub mementos: Vec<MementoEntry>,
}

impl TimeMap {
    /// Build a TimeMap whose first memento is the earliest entry.
    pub fn from_mementos(mementos: Vec<MementoEntry>) -> Self {
        Self {
            first: mementos.first().cloned(),
            mementos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }
}

/// Read-only provider of TimeMaps and memento content.
pub trait Collection {
    /// Identifiers of every TimeMap (URI-T) in the collection, in the
    /// collection's natural order.
    fn timemap_ids(&self) -> Result<Vec<String>, CollectionError>;

    /// The TimeMap for one identifier.
    fn timemap(&self, id: &str) -> Result<TimeMap, CollectionError>;

    /// Raw content of a memento.
    fn memento_content(&self, uri: &str) -> Result<Vec<u8>, CollectionError>;

    /// Content of a memento with boilerplate removed.
    fn memento_content_without_boilerplate(&self, uri: &str)
        -> Result<Vec<u8>, CollectionError>;
}
