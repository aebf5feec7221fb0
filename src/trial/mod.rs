//! One measured burst of concurrent requests against a fixed store state.
mod runner;
mod summary;


pub use runner::{HttpTrialRunner, TrialPort, TrialSpec};
pub use summary::TrialSummary;
