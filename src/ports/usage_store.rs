//! Usage event store port.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::entitlement::ResourceType;
use crate::domain::foundation::{PrincipalId, Timestamp};

/// Port over the append-only usage event stream.
///
/// Events carry an explicit `ResourceType`, set once at creation; nothing
/// is ever inferred from nullable columns or free-text prefixes.
///
/// # Contract
///
/// - `count_events` errors must surface to the caller; the decision engine
///   denies on an unverifiable count, never defaults to zero.
/// - `record` is invoked by the *caller* of the engine after the metered
///   action succeeds, not by the engine itself. The check and the insert
///   are deliberately two operations: concurrent requests can each observe
///   `used < limit` and both proceed, so the limit is soft by up to the
///   number of in-flight requests. Callers that need a hard cap must make
///   count-and-reserve a single atomic operation instead.
#[async_trait]
pub trait UsageStore: Send + Sync {
    /// Number of events for the principal with the given resource type and
    /// `occurred_at >= since`.
    async fn count_events(
        &self,
        principal: &PrincipalId,
        resource: ResourceType,
        since: Timestamp,
    ) -> Result<u64, StoreError>;

    /// Appends one completed-action event.
    async fn record(
        &self,
        principal: &PrincipalId,
        resource: ResourceType,
        occurred_at: Timestamp,
    ) -> Result<(), StoreError>;
}
