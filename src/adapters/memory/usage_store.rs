//! In-memory implementation of UsageStore.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entitlement::ResourceType;
use crate::domain::foundation::{PrincipalId, Timestamp};
use crate::ports::{StoreError, UsageStore};

#[derive(Debug, Clone)]
struct StoredEvent {
    principal: String,
    resource: ResourceType,
    occurred_at: Timestamp,
}

/// In-memory UsageStore for tests and local development.
///
/// Append-only like the real event stream; counting failure can be
/// injected separately from recording so fail-closed tests can still
/// arrange usage.
#[derive(Default)]
pub struct MemoryUsageStore {
    events: RwLock<Vec<StoredEvent>>,
    fail_counts: AtomicBool,
}

impl MemoryUsageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent counts fail with `StoreError::Unavailable`.
    pub fn set_count_failing(&self, fail: bool) {
        self.fail_counts.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl UsageStore for MemoryUsageStore {
    async fn count_events(
        &self,
        principal: &PrincipalId,
        resource: ResourceType,
        since: Timestamp,
    ) -> Result<u64, StoreError> {
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("simulated usage store outage"));
        }
        let events = self.events.read().expect("events lock poisoned");
        Ok(events
            .iter()
            .filter(|event| {
                event.principal == principal.as_str()
                    && event.resource == resource
                    && event.occurred_at >= since
            })
            .count() as u64)
    }

    async fn record(
        &self,
        principal: &PrincipalId,
        resource: ResourceType,
        occurred_at: Timestamp,
    ) -> Result<(), StoreError> {
        self.events
            .write()
            .expect("events lock poisoned")
            .push(StoredEvent {
                principal: principal.as_str().to_string(),
                resource,
                occurred_at,
            });
        Ok(())
    }
}
