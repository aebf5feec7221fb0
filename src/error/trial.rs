use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrialError {
    #[error("Request task {index} was lost before completing: {source}")]
    TaskLost {
        index: usize,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("In-flight limiter closed during a trial.")]
    LimiterClosed,
}
