// Content preparer — fetch a memento's content and normalize it.
//
// Pipeline when tokenizing: decode -> tokenize -> stem every token ->
// drop stopwords and punctuation. Stopwords are matched against the stems,
// not the original tokens. Without tokenization the decoded text is
// returned untouched.

use serde::Serialize;
use tracing::debug;

use super::stemmer::StemmingService;
use super::stopwords::StopwordFilter;
use super::tokenize::Tokenizer;
use crate::collection::traits::{Collection, CollectionError};

/// Flags controlling how content is prepared for a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrepareOptions {
    pub tokenize: bool,
    /// Only meaningful when `tokenize` is set
    pub stemming: bool,
    pub remove_boilerplate: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            tokenize: true,
            stemming: true,
            remove_boilerplate: true,
        }
    }
}

/// Content ready to be handed to a score function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PreparedContent {
    Text(String),
    Tokens(Vec<String>),
}

impl PreparedContent {
    /// Length in the unit a measure would count: bytes of text, or number
    /// of tokens.
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Tokens(tokens) => tokens.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The content as one flat string (tokens are joined without separator).
    pub fn joined(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Tokens(tokens) => tokens.concat(),
        }
    }
}

/// Normalizes memento content. Holds the tokenizer, stopword list and
/// stemmer so they are built once per run.
#[derive(Debug, Default)]
pub struct ContentPreparer {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    stemmer: StemmingService,
}

impl ContentPreparer {
    pub fn new(tokenizer: Tokenizer, stopwords: StopwordFilter, stemmer: StemmingService) -> Self {
        Self {
            tokenizer,
            stopwords,
            stemmer,
        }
    }

    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            ..Self::default()
        }
    }

    /// Fetch a memento's content from the collection and prepare it.
    ///
    /// Collection errors are returned as-is; deciding whether they are
    /// recoverable is the caller's job.
    pub fn prepare(
        &self,
        uri: &str,
        collection: &dyn Collection,
        options: PrepareOptions,
    ) -> Result<PreparedContent, CollectionError> {
        let raw = if options.remove_boilerplate {
            collection.memento_content_without_boilerplate(uri)?
        } else {
            collection.memento_content(uri)?
        };

        debug!(uri, bytes = raw.len(), ?options, "Preparing memento content");

        Ok(self.prepare_bytes(&raw, options))
    }

    /// Prepare already-fetched content. Invalid UTF-8 is replaced, not
    /// rejected.
    pub fn prepare_bytes(&self, raw: &[u8], options: PrepareOptions) -> PreparedContent {
        let text = String::from_utf8_lossy(raw);
        if options.tokenize {
            PreparedContent::Tokens(self.full_tokenize(&text, options.stemming))
        } else {
            PreparedContent::Text(text.into_owned())
        }
    }

    /// Tokenize, optionally stem, then remove stopwords and punctuation.
    pub fn full_tokenize(&self, text: &str, stemming: bool) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        let tokens = if stemming {
            self.stemmer.stem_all(&tokens)
        } else {
            tokens
        };
        self.stopwords.retain(tokens)
    }
}
