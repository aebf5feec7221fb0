use std::time::Duration;

use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the shared HTTP client used for every request of a run.
///
/// # Errors
///
/// Returns an error when the client cannot be built.
pub fn build_client(request_timeout: Duration, connect_timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(request_timeout)
        .connect_timeout(connect_timeout)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
