// Directory-backed collection.
//
// Layout: a `timemaps.json` manifest plus one file per memento, stored
// relative to the directory. Mementos the harvester failed to fetch are
// recorded in the manifest's `errors` map and reported as memento access
// errors, the same way a live collection would report them.
//
//   {
//     "timemaps": [
//       { "id": "https://example.com/",
//         "mementos": [ { "uri": "...", "datetime": "2016-01-01T00:00:00Z",
//                         "file": "content/0001.html" } ] }
//     ],
//     "errors": { "https://...": "HTTP 503" }
//   }
//
// Boilerplate-free content is read from `<file>.txt` when the harvester
// produced one, otherwise derived with `strip_boilerplate`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::boilerplate::strip_boilerplate;
use super::traits::{Collection, CollectionError, MementoEntry, TimeMap};

/// File name of the manifest inside a collection directory.
pub const MANIFEST_FILE: &str = "timemaps.json";

#[derive(Debug, Deserialize)]
struct Manifest {
    timemaps: Vec<ManifestTimeMap>,
    #[serde(default)]
    errors: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ManifestTimeMap {
    id: String,
    #[serde(default)]
    first: Option<String>,
    #[serde(default)]
    mementos: Vec<ManifestMemento>,
}

#[derive(Debug, Deserialize)]
struct ManifestMemento {
    uri: String,
    #[serde(default)]
    datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    file: Option<PathBuf>,
}

#[derive(Debug)]
pub struct DirectoryCollection {
    root: PathBuf,
    order: Vec<String>,
    timemaps: HashMap<String, TimeMap>,
    files: HashMap<String, PathBuf>,
    errors: HashMap<String, String>,
}

impl DirectoryCollection {
    /// Open a collection directory and parse its manifest.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let manifest_path = root.join(MANIFEST_FILE);
        let raw = fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read manifest {}", manifest_path.display()))?;
        let manifest: Manifest = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed manifest {}", manifest_path.display()))?;

        let mut order = Vec::with_capacity(manifest.timemaps.len());
        let mut timemaps = HashMap::new();
        let mut files: HashMap<String, PathBuf> = HashMap::new();

        for tm in manifest.timemaps {
            let mementos: Vec<MementoEntry> = tm
                .mementos
                .iter()
                .map(|m| MementoEntry {
                    uri: m.uri.clone(),
                    datetime: m.datetime,
                })
                .collect();

            let first = match tm.first {
                Some(uri) => Some(
                    mementos
                        .iter()
                        .find(|m| m.uri == uri)
                        .cloned()
                        .unwrap_or_else(|| MementoEntry::new(uri)),
                ),
                None => mementos.first().cloned(),
            };

            for m in tm.mementos {
                let Some(file) = m.file else { continue };
                if let Some(existing) = files.get(&m.uri) {
                    if *existing != file {
                        anyhow::bail!(
                            "Memento {} maps to both {} and {} in {}",
                            m.uri,
                            existing.display(),
                            file.display(),
                            manifest_path.display()
                        );
                    }
                    continue;
                }
                files.insert(m.uri, file);
            }

            if timemaps.contains_key(&tm.id) {
                anyhow::bail!("Duplicate TimeMap id {} in {}", tm.id, manifest_path.display());
            }
            order.push(tm.id.clone());
            timemaps.insert(tm.id, TimeMap { first, mementos });
        }

        debug!(
            root = %root.display(),
            timemaps = order.len(),
            mementos = files.len(),
            "Opened collection directory"
        );

        Ok(Self {
            root,
            order,
            timemaps,
            files,
            errors: manifest.errors,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn content_path(&self, uri: &str) -> Result<PathBuf, CollectionError> {
        if let Some(reason) = self.errors.get(uri) {
            return Err(CollectionError::memento_access(uri, reason.clone()));
        }
        let file = self
            .files
            .get(uri)
            .ok_or_else(|| CollectionError::memento_access(uri, "no content recorded"))?;
        Ok(self.root.join(file))
    }

    fn read(uri: &str, path: &Path) -> Result<Vec<u8>, CollectionError> {
        fs::read(path).map_err(|e| {
            CollectionError::memento_access(uri, format!("{}: {e}", path.display()))
        })
    }
}

impl Collection for DirectoryCollection {
    fn timemap_ids(&self) -> Result<Vec<String>, CollectionError> {
        Ok(self.order.clone())
    }

    fn timemap(&self, id: &str) -> Result<TimeMap, CollectionError> {
        self.timemaps
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("TimeMap {id} is not in {}", self.root.display()).into())
    }

    fn memento_content(&self, uri: &str) -> Result<Vec<u8>, CollectionError> {
        let path = self.content_path(uri)?;
        Self::read(uri, &path)
    }

    fn memento_content_without_boilerplate(
        &self,
        uri: &str,
    ) -> Result<Vec<u8>, CollectionError> {
        let path = self.content_path(uri)?;

        let mut extracted = path.clone().into_os_string();
        extracted.push(".txt");
        let extracted = PathBuf::from(extracted);
        if extracted.is_file() {
            return Self::read(uri, &extracted);
        }

        let raw = Self::read(uri, &path)?;
        Ok(strip_boilerplate(&String::from_utf8_lossy(&raw)).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_collection(dir: &Path) {
        fs::create_dir_all(dir.join("content")).unwrap();
        fs::write(dir.join("content/a0.html"), "<p>the cat sat</p>").unwrap();
        fs::write(dir.join("content/a1.html"), "<nav>menu</nav><p>the cat</p>").unwrap();
        fs::write(dir.join("content/a1.html.txt"), "the cat, extracted").unwrap();
        fs::write(
            dir.join(MANIFEST_FILE),
            r#"{
                "timemaps": [
                    { "id": "urit-a",
                      "mementos": [
                        { "uri": "a0", "datetime": "2016-01-01T00:00:00Z", "file": "content/a0.html" },
                        { "uri": "a1", "file": "content/a1.html" },
                        { "uri": "a2" },
                        { "uri": "a3", "file": "content/a3.html" }
                      ] },
                    { "id": "urit-empty" }
                ],
                "errors": { "a3": "HTTP 503" }
            }"#,
        )
        .unwrap();
    }

    #[test]
    fn test_open_and_read() {
        let dir = tempfile::tempdir().unwrap();
        write_collection(dir.path());
        let c = DirectoryCollection::open(dir.path()).unwrap();

        assert_eq!(c.timemap_ids().unwrap(), vec!["urit-a", "urit-empty"]);
        let tm = c.timemap("urit-a").unwrap();
        assert_eq!(tm.first.as_ref().unwrap().uri, "a0");
        assert!(tm.first.as_ref().unwrap().datetime.is_some());
        assert_eq!(tm.len(), 4);
        assert!(c.timemap("urit-empty").unwrap().is_empty());

        assert_eq!(c.memento_content("a0").unwrap(), b"<p>the cat sat</p>");
        assert_eq!(c.memento_content_without_boilerplate("a0").unwrap(), b"the cat sat");
        assert_eq!(
            c.memento_content_without_boilerplate("a1").unwrap(),
            b"the cat, extracted"
        );
    }

    #[test]
    fn test_missing_content_is_memento_access() {
        let dir = tempfile::tempdir().unwrap();
        write_collection(dir.path());
        let c = DirectoryCollection::open(dir.path()).unwrap();

        assert!(c.memento_content("a2").unwrap_err().is_memento_access());
        let err = c.memento_content("a3").unwrap_err();
        assert!(err.is_memento_access());
        assert!(err.to_string().contains("HTTP 503"));
        assert!(!c.timemap("urit-missing").unwrap_err().is_memento_access());
    }

    #[test]
    fn test_conflicting_content_files_fail() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{
                "timemaps": [
                    { "id": "urit-a", "mementos": [ { "uri": "m0", "file": "content/a.html" } ] },
                    { "id": "urit-b", "mementos": [ { "uri": "m0", "file": "content/b.html" } ] }
                ]
            }"#,
        )
        .unwrap();
        let err = DirectoryCollection::open(dir.path()).unwrap_err();
        assert!(format!("{err}").contains("m0"), "{err}");
    }

    #[test]
    fn test_shared_memento_with_same_file_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content/a.html"), "the cat").unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{
                "timemaps": [
                    { "id": "urit-a", "mementos": [ { "uri": "m0", "file": "content/a.html" } ] },
                    { "id": "urit-b", "mementos": [ { "uri": "m0", "file": "content/a.html" } ] }
                ]
            }"#,
        )
        .unwrap();
        let c = DirectoryCollection::open(dir.path()).unwrap();
        assert_eq!(c.memento_content("m0").unwrap(), b"the cat");
    }

    #[test]
    fn test_missing_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DirectoryCollection::open(dir.path()).is_err());
    }
}
