//! HTTP client construction, target URLs, and single-request execution.
mod client;
mod executor;
mod outcome;
mod target;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

pub use client::build_client;
pub use executor::RequestExecutor;
pub use outcome::{FailureReason, OutcomeStatus, RequestOutcome, SUCCESS_STATUS};
pub use target::{QueryShape, TargetEndpoint};
