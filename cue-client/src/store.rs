use crate::feeds::{ClueSource, FeedError, HistoricSource};
use cue_types::{ClueWord, HistoricResponse, Language};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::warn;

/// Clue lists per language, fetched once and shared.
///
/// Both languages are prefetched in the background at startup; whichever
/// consumer needs a list first either joins the in-flight fetch or starts
/// its own. A failed fetch leaves the cell empty, so the next `get`
/// retries instead of caching the error.
pub struct ClueStore<S: ClueSource> {
    source: S,
    cells: HashMap<Language, OnceCell<Arc<Vec<ClueWord>>>>,
}

impl<S: ClueSource> ClueStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cells: Language::ALL
                .into_iter()
                .map(|language| (language, OnceCell::new()))
                .collect(),
        }
    }

    /// The clue list for a language, waiting on an in-flight fetch or
    /// performing one if nothing is cached yet.
    pub async fn get(&self, language: Language) -> Result<Arc<Vec<ClueWord>>, FeedError> {
        let cell = &self.cells[&language];
        cell.get_or_try_init(|| async {
            self.source.fetch_clues(language).await.map(Arc::new)
        })
        .await
        .cloned()
    }

    /// Fire-and-forget warm-up; failures are logged and retried on demand.
    pub fn prefetch(self: &Arc<Self>, language: Language) {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(error) = store.get(language).await {
                warn!(%language, "clue prefetch failed: {error}");
            }
        });
    }
}

/// The aggregate store of prior responses, fetched once at startup.
///
/// An unreachable or empty store is tolerated silently: feedback sampling
/// degrades to "no comparisons available". The empty result is cached, so
/// a startup failure is not retried during the session.
pub struct HistoricStore<S: HistoricSource> {
    source: S,
    responses: OnceCell<Arc<Vec<HistoricResponse>>>,
}

impl<S: HistoricSource> HistoricStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            responses: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Arc<Vec<HistoricResponse>> {
        self.responses
            .get_or_init(|| async {
                match self.source.fetch_historic().await {
                    Ok(responses) => Arc::new(responses),
                    Err(error) => {
                        warn!("historic response fetch failed: {error}");
                        Arc::new(Vec::new())
                    }
                }
            })
            .await
            .clone()
    }

    pub fn prefetch(self: &Arc<Self>) {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            store.get().await;
        });
    }
}
