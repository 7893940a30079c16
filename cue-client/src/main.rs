use std::sync::Arc;
use tracing::{error, info};

use cue_client::config::Config;
use cue_client::driver::Driver;
use cue_client::feeds::{HttpFeeds, fetch_board};
use cue_client::store::{ClueStore, HistoricStore};
use cue_client::submit::GuessSubmitter;
use cue_core::Board;
use cue_types::Language;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Arc::new(Config::new());
    let client = reqwest::Client::new();
    let feeds = HttpFeeds::new(client.clone(), config.clone());

    // Warm both clue languages and the historic responses in the
    // background; the trial loop falls back to its own fetch if a warm-up
    // has not finished (or failed) by the time the data is needed.
    let clue_store = Arc::new(ClueStore::new(feeds.clone()));
    for language in Language::ALL {
        clue_store.prefetch(language);
    }
    let historic_store = Arc::new(HistoricStore::new(feeds));
    historic_store.prefetch();

    // The board is needed before the first trial renders, so this one is
    // awaited. A failed load degrades to an empty board rather than
    // aborting the session.
    let board = match fetch_board(&client, &config).await {
        Ok(cells) => {
            info!(cells = cells.len(), "board data loaded");
            Board::from_cells(cells)
        }
        Err(feed_error) => {
            error!("failed to load board data: {feed_error}");
            Board::default()
        }
    };

    let submitter = GuessSubmitter::new(client, config.collector_url.clone());
    let driver = Driver::new(clue_store, historic_store, board, submitter);

    if let Err(session_error) = driver.run().await {
        error!("session ended with an error: {session_error}");
        std::process::exit(1);
    }
}
