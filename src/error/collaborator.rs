use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorRole {
    #[error("seeder")]
    Seeder,
    #[error("reset")]
    Reset,
}

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("The {role} program '{program}' could not be located: {source}")]
    Unavailable {
        role: CollaboratorRole,
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to launch the {role} program '{program}': {source}")]
    Launch {
        role: CollaboratorRole,
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("The {role} program '{program}' exited with {status}: {stderr}")]
    Failed {
        role: CollaboratorRole,
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("Could not read an entity count from the {role} output.")]
    UnparseableCount { role: CollaboratorRole },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
