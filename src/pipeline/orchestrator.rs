// file: src/pipeline/orchestrator.rs
// description: concurrent per-word lookups collected back in input order
// reference: one spawned task per word, each reporting through its own oneshot slot

use crate::client::PageFetcher;
use crate::config::LookupConfig;
use crate::error::{LookupError, Result};
use crate::extractor::DefinitionExtractor;
use crate::models::SourcedDefinition;
use crate::utils::Validator;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Outcome of looking up one word.
#[derive(Debug)]
pub struct WordLookup {
    pub word: String,
    pub outcome: Result<Vec<SourcedDefinition>>,
}

impl WordLookup {
    pub fn into_result(self) -> Result<(String, Vec<SourcedDefinition>)> {
        self.outcome.map(|definitions| (self.word, definitions))
    }
}

/// A dispatched lookup whose result has not been read yet.
pub struct PendingLookup {
    word: String,
    slot: oneshot::Receiver<Result<Vec<SourcedDefinition>>>,
}

impl PendingLookup {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub async fn wait(self) -> WordLookup {
        let outcome = match self.slot.await {
            Ok(outcome) => outcome,
            Err(_) => Err(LookupError::TaskFailed(self.word.clone())),
        };
        WordLookup {
            word: self.word,
            outcome,
        }
    }
}

pub struct LookupOrchestrator<F: PageFetcher + 'static> {
    fetcher: Arc<F>,
    extractor: Arc<DefinitionExtractor>,
    base_url: String,
}

impl<F: PageFetcher + 'static> LookupOrchestrator<F> {
    pub fn new(fetcher: Arc<F>, config: &LookupConfig) -> Self {
        Self {
            fetcher,
            extractor: Arc::new(DefinitionExtractor::with_strict(config.strict_extraction)),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn word_url(&self, word: &str) -> String {
        format!("{}/words/{}", self.base_url, urlencoding::encode(word))
    }

    pub async fn lookup_word(&self, word: &str) -> Result<Vec<SourcedDefinition>> {
        lookup(
            self.fetcher.as_ref(),
            &self.extractor,
            word,
            &self.word_url(word),
        )
        .await
    }

    /// Spawns one task per word, all at once. The returned slots are in
    /// input order regardless of which task finishes first.
    pub fn dispatch(&self, words: &[String]) -> Vec<PendingLookup> {
        debug!("Dispatching {} lookups", words.len());

        words
            .iter()
            .map(|word| {
                let (tx, rx) = oneshot::channel();
                let fetcher = Arc::clone(&self.fetcher);
                let extractor = Arc::clone(&self.extractor);
                let url = self.word_url(word);
                let task_word = word.clone();

                tokio::spawn(async move {
                    let outcome = lookup(fetcher.as_ref(), &extractor, &task_word, &url).await;
                    match &outcome {
                        Ok(definitions) => {
                            debug!("Lookup for '{}' found {} definitions", task_word, definitions.len())
                        }
                        Err(e) => debug!("Lookup for '{}' failed: {}", task_word, e),
                    }
                    // the reader is gone once a batch has been aborted
                    let _ = tx.send(outcome);
                });

                PendingLookup {
                    word: word.clone(),
                    slot: rx,
                }
            })
            .collect()
    }

    /// Results in input order. Each item waits for its own slot, so a slow
    /// word holds back every word after it.
    pub fn results(&self, words: &[String]) -> impl Stream<Item = WordLookup> {
        stream::iter(self.dispatch(words)).then(PendingLookup::wait)
    }

    pub async fn lookup_all(&self, words: &[String]) -> Vec<WordLookup> {
        self.results(words).collect().await
    }

    /// Stops at the first failed slot in input order.
    pub async fn lookup_all_or_abort(
        &self,
        words: &[String],
    ) -> Result<Vec<(String, Vec<SourcedDefinition>)>> {
        self.results(words)
            .map(WordLookup::into_result)
            .try_collect()
            .await
    }
}

async fn lookup<F: PageFetcher + ?Sized>(
    fetcher: &F,
    extractor: &DefinitionExtractor,
    word: &str,
    url: &str,
) -> Result<Vec<SourcedDefinition>> {
    Validator::validate_word(word)?;

    let response = fetcher
        .get(url)
        .await
        .map_err(|e| LookupError::Transport {
            word: word.to_string(),
            message: e.to_string(),
        })?;

    if response.status != 200 {
        warn!("{} returned status {}", url, response.status);
        return Err(LookupError::UnexpectedStatus {
            word: word.to_string(),
            status: response.status,
        });
    }

    let html = String::from_utf8(response.body).map_err(|e| LookupError::MalformedDocument {
        word: word.to_string(),
        message: format!("body is not valid UTF-8: {}", e),
    })?;

    Validator::validate_content_not_empty(&html).map_err(|e| LookupError::MalformedDocument {
        word: word.to_string(),
        message: e.to_string(),
    })?;

    extractor.extract_from_html(&html)
}
