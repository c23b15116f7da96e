//! In-memory implementation of SubscriptionDirectory.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::PrincipalId;
use crate::ports::{PlanTag, StoreError, SubscriptionDirectory};

/// In-memory SubscriptionDirectory for tests and local development.
#[derive(Default)]
pub struct MemorySubscriptionDirectory {
    tags: RwLock<HashMap<String, HashSet<PlanTag>>>,
    fail: AtomicBool,
}

impl MemorySubscriptionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the principal's plan tags (e.g. to simulate an upgrade).
    pub fn set_plan_tags(&self, principal: &PrincipalId, tags: &[PlanTag]) {
        self.tags
            .write()
            .expect("directory lock poisoned")
            .insert(principal.as_str().to_string(), tags.iter().copied().collect());
    }

    /// Makes subsequent lookups fail with `StoreError::Unavailable`.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SubscriptionDirectory for MemorySubscriptionDirectory {
    async fn has_plan_tag(
        &self,
        principal: &PrincipalId,
        tag: PlanTag,
    ) -> Result<bool, StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("simulated directory outage"));
        }
        Ok(self
            .tags
            .read()
            .expect("directory lock poisoned")
            .get(principal.as_str())
            .is_some_and(|tags| tags.contains(&tag)))
    }
}
