mod app;
mod collaborator;
mod config;
mod http;
mod report;
mod trial;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use collaborator::{CollaboratorError, CollaboratorRole};
pub use config::ConfigError;
pub use http::HttpError;
pub use report::ReportError;
pub use trial::TrialError;
pub use validation::ValidationError;
