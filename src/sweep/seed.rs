use crate::collaborators::SeedRequest;

/// What the store currently holds, as far as the sweep knows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedState {
    pub users: u64,
    pub posts_per_user: u64,
    pub follows_per_user: u64,
}

/// How to move the store from one [`SeedState`] to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTransition {
    Unchanged,
    /// Add the delta on top of what is already there.
    Extend(SeedRequest),
    /// Reset the store and seed the target from scratch.
    Rebuild(SeedRequest),
}

impl SeedState {
    pub const EMPTY: SeedState = SeedState {
        users: 0,
        posts_per_user: 0,
        follows_per_user: 0,
    };

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.users == 0
    }

    #[must_use]
    pub const fn total_posts(&self) -> u64 {
        self.users.saturating_mul(self.posts_per_user)
    }

    /// Plans the move to `target`. Shrinking any dimension, or changing the
    /// population of a non-empty store, requires a rebuild.
    #[must_use]
    pub fn transition_to(&self, target: SeedState) -> SeedTransition {
        if *self == target {
            return SeedTransition::Unchanged;
        }
        let shrinks = target.users < self.users
            || target.posts_per_user < self.posts_per_user
            || target.follows_per_user < self.follows_per_user;
        let repopulates = !self.is_empty() && target.users != self.users;
        if shrinks || repopulates {
            return SeedTransition::Rebuild(SeedState::EMPTY.delta_to(target));
        }
        SeedTransition::Extend(self.delta_to(target))
    }

    fn delta_to(&self, target: SeedState) -> SeedRequest {
        let follows = target
            .follows_per_user
            .saturating_sub(self.follows_per_user);
        SeedRequest {
            users: target.users.saturating_sub(self.users),
            follows_min: follows,
            follows_max: follows,
            posts: target.total_posts().saturating_sub(self.total_posts()),
        }
    }
}
