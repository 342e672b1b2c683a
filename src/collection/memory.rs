// In-memory collection — holds TimeMaps and content directly.
//
// Used by tests and by callers that already have content in hand. Failures
// can be injected per memento to exercise the skip path of the pipeline.

use std::collections::{HashMap, HashSet};

use anyhow::anyhow;

use super::traits::{Collection, CollectionError, MementoEntry, TimeMap};

#[derive(Debug, Default, Clone)]
pub struct InMemoryCollection {
    /// Series in insertion order
    order: Vec<String>,
    timemaps: HashMap<String, TimeMap>,
    content: HashMap<String, Vec<u8>>,
    /// Boilerplate-free content, when it differs from the raw content
    stripped: HashMap<String, Vec<u8>>,
    failing: HashSet<String>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a TimeMap. Re-adding an id replaces its TimeMap but keeps its
    /// original position.
    pub fn with_timemap(mut self, id: &str, timemap: TimeMap) -> Self {
        if !self.timemaps.contains_key(id) {
            self.order.push(id.to_string());
        }
        self.timemaps.insert(id.to_string(), timemap);
        self
    }

    /// Add a TimeMap built from `(uri, content)` pairs. The first pair is the
    /// reference memento.
    pub fn with_series(mut self, id: &str, mementos: &[(&str, &str)]) -> Self {
        let entries = mementos
            .iter()
            .map(|(uri, _)| MementoEntry::new(*uri))
            .collect();
        for (uri, text) in mementos {
            self.content.insert(uri.to_string(), text.as_bytes().to_vec());
        }
        self.with_timemap(id, TimeMap::from_mementos(entries))
    }

    pub fn with_content(mut self, uri: &str, content: impl Into<Vec<u8>>) -> Self {
        self.content.insert(uri.to_string(), content.into());
        self
    }

    pub fn with_stripped_content(mut self, uri: &str, content: impl Into<Vec<u8>>) -> Self {
        self.stripped.insert(uri.to_string(), content.into());
        self
    }

    /// Make every content request for `uri` fail with a memento access error.
    pub fn with_failing_memento(mut self, uri: &str) -> Self {
        self.failing.insert(uri.to_string());
        self
    }

    fn lookup<'a>(
        &'a self,
        uri: &str,
        source: &'a HashMap<String, Vec<u8>>,
    ) -> Result<&'a Vec<u8>, CollectionError> {
        if self.failing.contains(uri) {
            return Err(CollectionError::memento_access(uri, "injected failure"));
        }
        source
            .get(uri)
            .or_else(|| self.content.get(uri))
            .ok_or_else(|| CollectionError::memento_access(uri, "no content stored"))
    }
}

impl Collection for InMemoryCollection {
    fn timemap_ids(&self) -> Result<Vec<String>, CollectionError> {
        Ok(self.order.clone())
    }

    fn timemap(&self, id: &str) -> Result<TimeMap, CollectionError> {
        self.timemaps
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown TimeMap {id}").into())
    }

    fn memento_content(&self, uri: &str) -> Result<Vec<u8>, CollectionError> {
        self.lookup(uri, &self.content).cloned()
    }

    fn memento_content_without_boilerplate(
        &self,
        uri: &str,
    ) -> Result<Vec<u8>, CollectionError> {
        self.lookup(uri, &self.stripped).cloned()
    }
}
