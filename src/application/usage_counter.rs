//! UsageCounter - windowed counts over the usage event stream.

use std::sync::Arc;

use crate::domain::entitlement::ResourceType;
use crate::domain::foundation::{PrincipalId, Timestamp};
use crate::ports::{StoreError, UsageStore};

/// Counts qualifying usage events within a resource's counting window.
///
/// Errors are returned to the caller deliberately: an inability to verify
/// consumed quota must never be treated as zero consumed, so the engine
/// converts a count failure into an outright denial.
pub struct UsageCounter {
    events: Arc<dyn UsageStore>,
}

impl UsageCounter {
    pub fn new(events: Arc<dyn UsageStore>) -> Self {
        Self { events }
    }

    /// Count events for the principal with `occurred_at >= window_start`.
    pub async fn count_in_window(
        &self,
        principal: &PrincipalId,
        resource: ResourceType,
        window_start: Timestamp,
    ) -> Result<u64, StoreError> {
        self.events
            .count_events(principal, resource, window_start)
            .await
    }

    /// Count events in the resource's current window as of `now`:
    /// all-time for tutors, the current calendar month for sessions.
    pub async fn count_current(
        &self,
        principal: &PrincipalId,
        resource: ResourceType,
        now: Timestamp,
    ) -> Result<u64, StoreError> {
        self.count_in_window(principal, resource, resource.window_start(now))
            .await
    }
}
