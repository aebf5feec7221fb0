//! Seeder and reset collaborators that prepare and clear the target store.
mod memory;
mod process;
mod types;


use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppResult;

pub use memory::{EntityKind, MemoryStore, RESERVED_KIND_PREFIX};
pub use process::{ProcessResetter, ProcessSeeder};
pub use types::{DELETE_BATCH_SIZE, ResetReport, ResetRequest, SeedRequest};

#[async_trait]
pub trait Seeder: Send + Sync {
    /// Adds the requested entities to the store and returns the collaborator's
    /// textual output.
    ///
    /// # Errors
    ///
    /// Returns an error when the collaborator is unavailable or fails.
    async fn seed(&self, request: SeedRequest) -> AppResult<String>;
}

#[async_trait]
pub trait Resetter: Send + Sync {
    /// Deletes (or, on dry-run, counts) entities matching the request.
    ///
    /// # Errors
    ///
    /// Returns an error when the collaborator is unavailable, fails, or its
    /// count cannot be read.
    async fn reset(&self, request: ResetRequest) -> AppResult<ResetReport>;
}

/// The seeder/reset pair selected for a run.
#[derive(Clone)]
pub struct Collaborators {
    pub seeder: Arc<dyn Seeder>,
    pub resetter: Arc<dyn Resetter>,
}

impl Collaborators {
    #[must_use]
    pub fn in_memory(store: &Arc<MemoryStore>) -> Self {
        Self {
            seeder: Arc::clone(store) as Arc<dyn Seeder>,
            resetter: Arc::clone(store) as Arc<dyn Resetter>,
        }
    }
}
