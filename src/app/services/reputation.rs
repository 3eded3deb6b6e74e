//! User reputation tracking
//!
//! Reputation is an integer in [-5, 5] adjusted by one unit per completed
//! report. Adjustments beyond a bound are no-ops, not errors, so repeated
//! calls at a bound are idempotent.

use crate::app::stores::UserStore;
use crate::constants::reputation;
use crate::{Error, Result};
use std::sync::Arc;
use tracing::debug;

/// Adjusts user reputation through the injected user store
#[derive(Clone)]
pub struct ReputationTracker {
    users: Arc<dyn UserStore>,
}

impl ReputationTracker {
    /// Create a tracker over the given user store
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Increase a user's reputation by one, capped at the ceiling;
    /// returns the new reputation
    pub fn increase(&self, user_id: i32) -> Result<i32> {
        self.adjust(user_id, 1)
    }

    /// Decrease a user's reputation by one, floored at the minimum;
    /// returns the new reputation
    pub fn decrease(&self, user_id: i32) -> Result<i32> {
        self.adjust(user_id, -1)
    }

    fn adjust(&self, user_id: i32, delta: i32) -> Result<i32> {
        if user_id < 0 {
            return Err(Error::invalid_user(format!(
                "user id {} must be non-negative",
                user_id
            )));
        }

        let mut user = self
            .users
            .get(user_id)
            .ok_or_else(|| Error::invalid_user(format!("no user with id {}", user_id)))?;

        let adjusted = (user.reputation + delta).clamp(reputation::MIN, reputation::MAX);
        if adjusted != user.reputation {
            user.reputation = adjusted;
            self.users.update(user);
            debug!("User {} reputation adjusted to {}", user_id, adjusted);
        }

        Ok(adjusted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::User;
    use crate::app::stores::MemoryUserStore;

    fn tracker_with_user(user: User) -> (ReputationTracker, Arc<MemoryUserStore>) {
        let store = Arc::new(MemoryUserStore::with_users([user]));
        (ReputationTracker::new(store.clone()), store)
    }

    #[test]
    fn test_increase_and_decrease() {
        let (tracker, store) = tracker_with_user(User::new(1, 0));

        assert_eq!(tracker.increase(1).unwrap(), 1);
        assert_eq!(tracker.decrease(1).unwrap(), 0);
        assert_eq!(store.get(1).unwrap().reputation, 0);
    }

    #[test]
    fn test_increase_is_idempotent_at_ceiling() {
        let (tracker, store) = tracker_with_user(User::new(1, 4));

        assert_eq!(tracker.increase(1).unwrap(), 5);
        for _ in 0..10 {
            assert_eq!(tracker.increase(1).unwrap(), 5);
        }
        assert_eq!(store.get(1).unwrap().reputation, 5);
    }

    #[test]
    fn test_decrease_is_idempotent_at_floor() {
        let (tracker, store) = tracker_with_user(User::new(1, -4));

        assert_eq!(tracker.decrease(1).unwrap(), -5);
        for _ in 0..10 {
            assert_eq!(tracker.decrease(1).unwrap(), -5);
        }
        assert_eq!(store.get(1).unwrap().reputation, -5);
    }

    #[test]
    fn test_negative_user_id_rejected() {
        let (tracker, _) = tracker_with_user(User::new(1, 0));
        assert!(matches!(
            tracker.increase(-1),
            Err(Error::InvalidUser { .. })
        ));
        assert!(matches!(
            tracker.decrease(-7),
            Err(Error::InvalidUser { .. })
        ));
    }

    #[test]
    fn test_unknown_user_rejected() {
        let (tracker, _) = tracker_with_user(User::new(1, 0));
        assert!(matches!(
            tracker.increase(42),
            Err(Error::InvalidUser { .. })
        ));
    }
}
