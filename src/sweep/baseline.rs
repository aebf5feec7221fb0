use crate::args::{Axis, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult};
use crate::trial::TrialSpec;

use super::seed::SeedState;

/// Values every axis holds fixed except the one it varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    pub users: PositiveU64,
    pub concurrency: PositiveUsize,
    pub posts: u64,
    pub follows: u64,
}

/// The store state and trial shape for one value of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub seed: SeedState,
    pub trial: TrialSpec,
}

impl Baseline {
    /// # Errors
    ///
    /// Returns an error when a concurrency value does not fit in `usize`.
    pub fn step_for(&self, axis: Axis, value: PositiveU64) -> AppResult<Step> {
        let mut seed = SeedState {
            users: self.users.get(),
            posts_per_user: self.posts,
            follows_per_user: self.follows,
        };
        let mut trial = TrialSpec {
            user_bound: self.users,
            concurrency: self.concurrency,
        };
        match axis {
            Axis::Concurrency => {
                let width = usize::try_from(value.get()).unwrap_or(usize::MAX);
                trial.concurrency = PositiveUsize::try_from(width).map_err(AppError::validation)?;
            }
            Axis::Posts => seed.posts_per_user = value.get(),
            Axis::Follows => seed.follows_per_user = value.get(),
        }
        Ok(Step { seed, trial })
    }
}
