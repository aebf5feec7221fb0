//! Repeated trials across the values of one axis, with the store seeded to
//! match each value.
mod baseline;
mod record;
mod seed;
mod sweeper;


pub use baseline::{Baseline, Step};
pub use record::{ExperimentRecord, TrialResult};
pub use seed::{SeedState, SeedTransition};
pub use sweeper::ExperimentSweeper;
