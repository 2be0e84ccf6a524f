//! Per-administrator "reply mode" state.
//!
//! An administrator presses the reply button under a forwarded card, which
//! arms a target chat for them. Their next plain text message consumes it and
//! is delivered to that chat. At most one target is held per administrator;
//! arming again overwrites the previous one.
//!
//! The map is guarded by a synchronous mutex that is never held across an
//! `.await`, so `consume` is a single atomic read-and-remove.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use teloxide::types::{ChatId, UserId};

/// Pending reply target per administrator.
#[derive(Debug, Default)]
pub struct PendingReplies {
    targets: Mutex<HashMap<UserId, ChatId>>,
}

impl PendingReplies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pending target for `admin`, replacing any earlier one.
    pub fn arm(&self, admin: UserId, target: ChatId) {
        self.lock().insert(admin, target);
    }

    /// Takes the pending target for `admin`, leaving nothing behind.
    pub fn consume(&self, admin: UserId) -> Option<ChatId> {
        self.lock().remove(&admin)
    }

    /// Number of administrators currently in reply mode.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic elsewhere cannot leave the map half-written, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<UserId, ChatId>> {
        self.targets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
