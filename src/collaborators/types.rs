/// Entities deleted per batch by every reset implementation.
pub const DELETE_BATCH_SIZE: usize = 500;

/// Entities the seeder adds on one call. Every field is a delta:
/// `users` new users are created, every user in the store gains between
/// `follows_min` and `follows_max` followees, and `posts` new posts are
/// spread across the users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedRequest {
    pub users: u64,
    pub follows_min: u64,
    pub follows_max: u64,
    pub posts: u64,
}

impl SeedRequest {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.users == 0 && self.follows_max == 0 && self.posts == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetRequest {
    pub kind: Option<String>,
    pub dry_run: bool,
}

impl ResetRequest {
    #[must_use]
    pub const fn everything() -> Self {
        Self {
            kind: None,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetReport {
    pub count: u64,
    pub dry_run: bool,
}
