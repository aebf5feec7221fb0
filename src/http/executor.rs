use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;
use url::Url;

use super::outcome::{FailureReason, RequestOutcome};

/// Issues single timed GET requests. Never returns an error: every failure is
/// folded into the outcome.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    client: Client,
}

impl RequestExecutor {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn execute(&self, url: Url) -> RequestOutcome {
        let start = Instant::now();
        match self.client.get(url).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                match drain_response_body(response).await {
                    Ok(_) => RequestOutcome::from_status_code(start.elapsed(), code),
                    Err(err) => {
                        debug!("Failed to read response body: {}", err);
                        RequestOutcome::failed(start.elapsed(), FailureReason::from_reqwest(&err))
                    }
                }
            }
            Err(err) => {
                debug!("Request failed: {}", err);
                RequestOutcome::failed(start.elapsed(), FailureReason::from_reqwest(&err))
            }
        }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
