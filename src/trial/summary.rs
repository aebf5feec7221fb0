use crate::http::RequestOutcome;

/// Outcomes of one trial, in dispatch order, plus their reductions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSummary {
    pub outcomes: Vec<RequestOutcome>,
    pub mean_latency_us: u64,
    pub failed: usize,
}

impl TrialSummary {
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<RequestOutcome>) -> Self {
        let total_us = outcomes.iter().fold(0u128, |acc, outcome| {
            acc.saturating_add(outcome.elapsed.as_micros())
        });
        let count = u128::try_from(outcomes.len()).unwrap_or(u128::MAX);
        let mean_latency_us = total_us
            .checked_div(count)
            .map_or(0, |mean| u64::try_from(mean).unwrap_or(u64::MAX));
        let failed = outcomes
            .iter()
            .filter(|outcome| !outcome.is_success())
            .count();
        Self {
            outcomes,
            mean_latency_us,
            failed,
        }
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.len().saturating_sub(self.failed)
    }
}
