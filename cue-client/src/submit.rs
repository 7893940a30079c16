use cue_types::GuessRecord;
use reqwest::{Client, StatusCode, header};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode guess: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("submission request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("collector returned status {0}")]
    Status(StatusCode),
}

/// Delivers accepted guesses to the remote collector.
///
/// One POST per call, no retry and no idempotency key; a resubmission
/// after a transient failure looks exactly like a first attempt. The
/// session state machine's in-flight flag is what prevents concurrent
/// submissions, not this service.
pub struct GuessSubmitter {
    client: Client,
    collector_url: String,
}

impl GuessSubmitter {
    pub fn new(client: Client, collector_url: String) -> Self {
        Self {
            client,
            collector_url,
        }
    }

    /// Serialize and deliver one guess. Success is any 2xx response; the
    /// record must only be appended to the session log when this returns
    /// Ok.
    pub async fn submit(&self, record: &GuessRecord) -> Result<(), SubmitError> {
        let body = serde_json::to_string(record)?;
        debug!(coordinate = %record.coordinate, clue_id = %record.clue_id, "submitting guess");

        // The collector only accepts the JSON payload declared as plain text.
        let response = self
            .client
            .post(&self.collector_url)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(%status, "guess registered");
            Ok(())
        } else {
            Err(SubmitError::Status(status))
        }
    }
}
