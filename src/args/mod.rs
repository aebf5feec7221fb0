//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{Command, ResetArgs, SweepArgs};
pub use types::{Axis, CollaboratorBackend, PositiveU64, PositiveUsize};

pub(crate) use defaults::DEFAULT_USER_AGENT;
#[cfg(test)]
pub(crate) use defaults::default_output_path;
