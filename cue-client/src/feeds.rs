use crate::config::Config;
use async_trait::async_trait;
use cue_core::csv;
use cue_types::{BoardCell, ClueWord, HistoricResponse, Language};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("feed returned status {0}")]
    Status(StatusCode),
    #[error("could not read board asset: {0}")]
    Asset(#[from] std::io::Error),
    #[error("{0}")]
    Malformed(anyhow::Error),
}

async fn fetch_text(client: &Client, url: &str) -> Result<String, FeedError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status));
    }
    Ok(response.text().await?)
}

/// GET the clue feed for a language and parse it.
pub async fn fetch_clues(
    client: &Client,
    config: &Config,
    language: Language,
) -> Result<Vec<ClueWord>, FeedError> {
    let text = fetch_text(client, &config.clue_feed_url(language)).await?;
    csv::parse_clues(&text).map_err(FeedError::Malformed)
}

/// Load the board feed. The source is a local asset by default and an
/// http(s) URL when configured that way.
pub async fn fetch_board(client: &Client, config: &Config) -> Result<Vec<BoardCell>, FeedError> {
    let source = &config.board_feed;
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_text(client, source).await?
    } else {
        tokio::fs::read_to_string(source).await?
    };
    csv::parse_board(&text).map_err(FeedError::Malformed)
}

/// GET the aggregate store of prior responses and parse it.
pub async fn fetch_historic(
    client: &Client,
    config: &Config,
) -> Result<Vec<HistoricResponse>, FeedError> {
    let text = fetch_text(client, &config.historic_feed_url).await?;
    Ok(csv::parse_historic(&text))
}

/// Where clue words come from. The stores depend on this seam rather than
/// on reqwest so their caching behavior is testable offline.
#[async_trait]
pub trait ClueSource: Send + Sync + 'static {
    async fn fetch_clues(&self, language: Language) -> Result<Vec<ClueWord>, FeedError>;
}

/// Where historic responses come from.
#[async_trait]
pub trait HistoricSource: Send + Sync + 'static {
    async fn fetch_historic(&self) -> Result<Vec<HistoricResponse>, FeedError>;
}

/// The production source: HTTP against the configured feeds.
#[derive(Clone)]
pub struct HttpFeeds {
    client: Client,
    config: Arc<Config>,
}

impl HttpFeeds {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ClueSource for HttpFeeds {
    async fn fetch_clues(&self, language: Language) -> Result<Vec<ClueWord>, FeedError> {
        fetch_clues(&self.client, &self.config, language).await
    }
}

#[async_trait]
impl HistoricSource for HttpFeeds {
    async fn fetch_historic(&self) -> Result<Vec<HistoricResponse>, FeedError> {
        fetch_historic(&self.client, &self.config).await
    }
}
