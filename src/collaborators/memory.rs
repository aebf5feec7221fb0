use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::AppResult;

use super::types::{DELETE_BATCH_SIZE, ResetReport, ResetRequest, SeedRequest};
use super::{Resetter, Seeder};

/// Kinds starting with this prefix belong to the store itself and survive an
/// unfiltered reset.
pub const RESERVED_KIND_PREFIX: &str = "__";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    User,
    Post,
    Follow,
    Other(String),
}

impl EntityKind {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "User" => EntityKind::User,
            "Post" => EntityKind::Post,
            "Follow" => EntityKind::Follow,
            other => EntityKind::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            EntityKind::User => "User",
            EntityKind::Post => "Post",
            EntityKind::Follow => "Follow",
            EntityKind::Other(name) => name,
        }
    }

    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.as_str().starts_with(RESERVED_KIND_PREFIX)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
struct StoreState {
    entities: BTreeMap<EntityKind, BTreeSet<u64>>,
    next_id: u64,
}

impl StoreState {
    fn insert(&mut self, kind: EntityKind, count: u64) {
        let ids = self.entities.entry(kind).or_default();
        for _ in 0..count {
            self.next_id = self.next_id.saturating_add(1);
            ids.insert(self.next_id);
        }
    }

    fn count(&self, kind: &EntityKind) -> u64 {
        self.entities
            .get(kind)
            .map_or(0, |ids| u64::try_from(ids.len()).unwrap_or(u64::MAX))
    }
}

/// In-process entity store backing both collaborator roles.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `count` anonymous entities of `kind`.
    pub async fn insert(&self, kind: EntityKind, count: u64) {
        self.state.lock().await.insert(kind, count);
    }

    pub async fn count(&self, kind: &EntityKind) -> u64 {
        self.state.lock().await.count(kind)
    }

    pub async fn total(&self) -> u64 {
        let state = self.state.lock().await;
        state.entities.values().fold(0u64, |acc, ids| {
            acc.saturating_add(u64::try_from(ids.len()).unwrap_or(u64::MAX))
        })
    }
}

#[async_trait]
impl Seeder for MemoryStore {
    async fn seed(&self, request: SeedRequest) -> AppResult<String> {
        let mut state = self.state.lock().await;
        state.insert(EntityKind::User, request.users);

        let user_count = state.count(&EntityKind::User);
        let mut follows_added: u64 = 0;
        if request.follows_max > 0 {
            let mut rng = rand::thread_rng();
            let low = request.follows_min.min(request.follows_max);
            for _ in 0..user_count {
                let follows = rng.gen_range(low..=request.follows_max);
                follows_added = follows_added.saturating_add(follows);
            }
        }
        state.insert(EntityKind::Follow, follows_added);
        state.insert(EntityKind::Post, request.posts);

        let output = format!(
            "Seeded {} users, {} follows, {} posts",
            request.users, follows_added, request.posts
        );
        debug!("{}", output);
        Ok(output)
    }
}

#[async_trait]
impl Resetter for MemoryStore {
    async fn reset(&self, request: ResetRequest) -> AppResult<ResetReport> {
        let mut state = self.state.lock().await;
        let filter = request.kind.as_deref().map(EntityKind::from_name);

        let keys: Vec<(EntityKind, u64)> = state
            .entities
            .iter()
            .filter(|(kind, _)| match filter.as_ref() {
                Some(wanted) => *kind == wanted,
                None => !kind.is_reserved(),
            })
            .flat_map(|(kind, ids)| ids.iter().map(move |id| (kind.clone(), *id)))
            .collect();
        let count = u64::try_from(keys.len()).unwrap_or(u64::MAX);

        if !request.dry_run {
            for (batch_index, batch) in keys.chunks(DELETE_BATCH_SIZE).enumerate() {
                for (kind, id) in batch {
                    if let Some(ids) = state.entities.get_mut(kind) {
                        ids.remove(id);
                    }
                }
                debug!("Deleted batch {} ({} entities)", batch_index, batch.len());
            }
            state.entities.retain(|_, ids| !ids.is_empty());
        }

        Ok(ResetReport {
            count,
            dry_run: request.dry_run,
        })
    }
}
