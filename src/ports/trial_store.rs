//! Trial store port.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::entitlement::TrialRecord;
use crate::domain::foundation::{PrincipalId, Timestamp};

/// Port for reading and provisioning trial records.
///
/// # Contract
///
/// - At most one trial record ever exists per principal.
/// - Records are immutable once written and never deleted; expiry is
///   implicit in `ends_at`.
/// - `find_trial` distinguishes "no record" (`Ok(None)`) from a failed
///   lookup (`Err`); the trial evaluator treats the latter as no override
///   so a lookup hiccup never blocks a paying user.
#[async_trait]
pub trait TrialStore: Send + Sync {
    /// The principal's trial record, if one was ever created.
    async fn find_trial(&self, principal: &PrincipalId)
        -> Result<Option<TrialRecord>, StoreError>;

    /// Creates the principal's one-and-only trial record, starting at `now`.
    ///
    /// Idempotent: if a record already exists the original is returned
    /// unchanged, regardless of `now`.
    async fn start_trial(
        &self,
        principal: &PrincipalId,
        now: Timestamp,
    ) -> Result<TrialRecord, StoreError>;
}
