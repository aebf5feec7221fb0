use std::time::Duration;

/// The only status code counted as a success.
pub const SUCCESS_STATUS: u16 = 200;

/// Why a request did not succeed. Kept coarse on purpose: the harness reports
/// failure rates, not diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    Status(u16),
    Timeout,
    Connect,
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Success,
    Failure(FailureReason),
}

/// Timing and classification of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOutcome {
    pub elapsed: Duration,
    pub status: OutcomeStatus,
}

impl RequestOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Success)
    }

    #[must_use]
    pub fn from_status_code(elapsed: Duration, code: u16) -> Self {
        let status = if code == SUCCESS_STATUS {
            OutcomeStatus::Success
        } else {
            OutcomeStatus::Failure(FailureReason::Status(code))
        };
        Self { elapsed, status }
    }

    #[must_use]
    pub const fn failed(elapsed: Duration, reason: FailureReason) -> Self {
        Self {
            elapsed,
            status: OutcomeStatus::Failure(reason),
        }
    }
}

impl FailureReason {
    pub(crate) fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            FailureReason::Timeout
        } else if err.is_connect() {
            FailureReason::Connect
        } else {
            FailureReason::Transport
        }
    }
}
