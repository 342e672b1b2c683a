use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::collection::directory::MANIFEST_FILE;
use crate::text::stopwords::StopwordList;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over anything set here.
pub struct Config {
    /// Directory holding `timemaps.json` and the memento content files
    pub collection_dir: PathBuf,
    /// Which English stopword list the content preparer uses (default: NLTK)
    pub stopword_list: StopwordList,
    /// Where to write JSON results, if anywhere
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let stopword_list = match env::var("TIMEMAP_DRIFT_STOPWORDS") {
            Ok(name) if !name.is_empty() => name.parse()?,
            _ => StopwordList::default(),
        };

        Ok(Self {
            collection_dir: env::var("TIMEMAP_DRIFT_COLLECTION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./collection")),
            stopword_list,
            output_path: env::var("TIMEMAP_DRIFT_OUTPUT")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Check that the collection directory and its manifest exist.
    /// Call this before opening the collection.
    pub fn require_collection(&self) -> Result<()> {
        if !self.collection_dir.is_dir() {
            anyhow::bail!(
                "Collection directory {} not found.\n\
                 Pass --collection or set TIMEMAP_DRIFT_COLLECTION_DIR in your .env file.",
                self.collection_dir.display()
            );
        }
        if !self.collection_dir.join(MANIFEST_FILE).is_file() {
            anyhow::bail!(
                "No {} in {}. A collection directory needs a manifest listing its TimeMaps.",
                MANIFEST_FILE,
                self.collection_dir.display()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            collection_dir: dir.path().join("missing"),
            stopword_list: StopwordList::Nltk,
            output_path: None,
        };
        assert!(config.require_collection().is_err());

        config.collection_dir = dir.path().to_path_buf();
        assert!(config.require_collection().is_err());

        std::fs::write(dir.path().join(MANIFEST_FILE), r#"{"timemaps": []}"#).unwrap();
        assert!(config.require_collection().is_ok());
    }
}
