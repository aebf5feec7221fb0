use tracing::{debug, info};

use crate::args::{Axis, PositiveU64, PositiveUsize};
use crate::collaborators::{Collaborators, ResetRequest, SeedRequest};
use crate::error::AppResult;
use crate::trial::TrialPort;

use super::baseline::Baseline;
use super::record::{ExperimentRecord, TrialResult};
use super::seed::{SeedState, SeedTransition};

/// Drives one axis at a time: reset, then for each value seed the delta and
/// run the trials.
pub struct ExperimentSweeper<'run, T> {
    trials: &'run T,
    collaborators: Option<&'run Collaborators>,
    baseline: Baseline,
    repetitions: PositiveUsize,
}

impl<'run, T> ExperimentSweeper<'run, T>
where
    T: TrialPort,
{
    /// Without collaborators the store is measured as it is.
    #[must_use]
    pub const fn new(
        trials: &'run T,
        collaborators: Option<&'run Collaborators>,
        baseline: Baseline,
        repetitions: PositiveUsize,
    ) -> Self {
        Self {
            trials,
            collaborators,
            baseline,
            repetitions,
        }
    }

    /// Runs every value of `axis` in order, `repetitions` trials each.
    ///
    /// # Errors
    ///
    /// Returns an error when a collaborator fails or a trial loses a request
    /// task. Nothing recorded so far is returned in that case.
    pub async fn run_axis(&self, axis: Axis, values: &[PositiveU64]) -> AppResult<ExperimentRecord> {
        let mut record = ExperimentRecord::new(axis);
        let mut state = SeedState::EMPTY;
        if let Some(collaborators) = self.collaborators {
            reset_store(collaborators).await?;
        }

        for value in values {
            let step = self.baseline.step_for(axis, *value)?;
            if let Some(collaborators) = self.collaborators {
                state = prepare_store(collaborators, state, step.seed).await?;
            }
            info!(
                "{} = {}: running {} trials of {} requests",
                axis,
                value,
                self.repetitions,
                step.trial.concurrency
            );
            for run in 0..self.repetitions.get() {
                let summary = self.trials.run_trial(step.trial).await?;
                debug!(
                    "{} = {} run {}: mean {}us, {} failed",
                    axis, value, run, summary.mean_latency_us, summary.failed
                );
                record.push(TrialResult {
                    param: value.get(),
                    mean_latency_us: summary.mean_latency_us,
                    failed: summary.failed,
                    run,
                });
            }
        }
        Ok(record)
    }
}

async fn reset_store(collaborators: &Collaborators) -> AppResult<()> {
    let report = collaborators
        .resetter
        .reset(ResetRequest::everything())
        .await?;
    info!("Store reset: {} entities removed", report.count);
    Ok(())
}

async fn prepare_store(
    collaborators: &Collaborators,
    current: SeedState,
    target: SeedState,
) -> AppResult<SeedState> {
    match current.transition_to(target) {
        SeedTransition::Unchanged => {}
        SeedTransition::Extend(request) => seed(collaborators, request).await?,
        SeedTransition::Rebuild(request) => {
            info!("Target state cannot extend the seeded store; rebuilding");
            reset_store(collaborators).await?;
            seed(collaborators, request).await?;
        }
    }
    Ok(target)
}

async fn seed(collaborators: &Collaborators, request: SeedRequest) -> AppResult<()> {
    if request.is_empty() {
        return Ok(());
    }
    info!(
        "Seeding {} users, {}-{} follows per user, {} posts",
        request.users, request.follows_min, request.follows_max, request.posts
    );
    let output = collaborators.seeder.seed(request).await?;
    for line in output.lines() {
        debug!("[seeder] {}", line);
    }
    Ok(())
}
