// Stemming service.
//
// Wraps the English Snowball stemmer. Constructed explicitly and handed to
// the content preparer; there is no process-wide instance.

use rust_stemmers::{Algorithm, Stemmer};

pub struct StemmingService {
    stemmer: Stemmer,
}

impl Default for StemmingService {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Debug for StemmingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemmingService").finish_non_exhaustive()
    }
}

impl StemmingService {
    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Lowercase a token and reduce it to its stem.
    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(&token.to_lowercase()).into_owned()
    }

    pub fn stem_all(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|t| self.stem(t)).collect()
    }
}
