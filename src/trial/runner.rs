use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use rand::Rng;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::args::{PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, TrialError};
use crate::http::{RequestExecutor, TargetEndpoint};

use super::summary::TrialSummary;

/// Shape of one trial: user ids are drawn from `[1, user_bound]` and exactly
/// `concurrency` requests are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialSpec {
    pub user_bound: PositiveU64,
    pub concurrency: PositiveUsize,
}

#[async_trait]
pub trait TrialPort: Send + Sync {
    /// Runs one warm-up request followed by `spec.concurrency` measured ones.
    ///
    /// # Errors
    ///
    /// Returns an error when a request task is lost.
    async fn run_trial(&self, spec: TrialSpec) -> AppResult<TrialSummary>;
}

/// Runs trials against the HTTP target.
#[derive(Debug, Clone)]
pub struct HttpTrialRunner {
    executor: RequestExecutor,
    target: Arc<TargetEndpoint>,
    max_in_flight: Option<PositiveUsize>,
}

impl HttpTrialRunner {
    #[must_use]
    pub const fn new(
        executor: RequestExecutor,
        target: Arc<TargetEndpoint>,
        max_in_flight: Option<PositiveUsize>,
    ) -> Self {
        Self {
            executor,
            target,
            max_in_flight,
        }
    }

    fn in_flight_limit(&self, concurrency: PositiveUsize) -> usize {
        self.max_in_flight
            .map_or(concurrency.get(), |limit| limit.get().min(concurrency.get()))
    }
}

#[async_trait]
impl TrialPort for HttpTrialRunner {
    async fn run_trial(&self, spec: TrialSpec) -> AppResult<TrialSummary> {
        let concurrency = spec.concurrency.get();
        let (warmup_id, user_ids) = {
            let mut rng = rand::thread_rng();
            let bound = spec.user_bound.get();
            let warmup_id = rng.gen_range(1..=bound);
            let user_ids: Vec<u64> = (0..concurrency)
                .map(|_| rng.gen_range(1..=bound))
                .collect();
            (warmup_id, user_ids)
        };

        let warmup = self
            .executor
            .execute(self.target.url_for_user(warmup_id))
            .await;
        debug!(
            "Warm-up request finished in {:?} (success: {})",
            warmup.elapsed,
            warmup.is_success()
        );

        let limiter = Arc::new(Semaphore::new(self.in_flight_limit(spec.concurrency)));
        let handles: Vec<_> = user_ids
            .into_iter()
            .map(|user_id| {
                let limiter = Arc::clone(&limiter);
                let executor = self.executor.clone();
                let url = self.target.url_for_user(user_id);
                tokio::spawn(async move {
                    let _permit = limiter
                        .acquire_owned()
                        .await
                        .map_err(|_closed| TrialError::LimiterClosed)?;
                    Ok::<_, TrialError>(executor.execute(url).await)
                })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(concurrency);
        for (index, joined) in join_all(handles).await.into_iter().enumerate() {
            let outcome = joined
                .map_err(|source| AppError::trial(TrialError::TaskLost { index, source }))?
                .map_err(AppError::trial)?;
            outcomes.push(outcome);
        }

        Ok(TrialSummary::from_outcomes(outcomes))
    }
}
