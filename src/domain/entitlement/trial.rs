//! Trial window record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PrincipalId, Timestamp};

/// Length of the trial window in days, fixed at record creation.
pub const TRIAL_PERIOD_DAYS: i64 = 7;

/// A principal's one-and-only trial record.
///
/// Created on the first qualifying interaction and immutable afterward:
/// `ends_at` is derived from `started_at` at creation and never recomputed
/// or mutated. Expiry is implicit in `ends_at`; records are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub principal: PrincipalId,
    pub started_at: Timestamp,
    pub ends_at: Timestamp,
}

impl TrialRecord {
    /// Creates a trial starting at `started_at`, ending exactly
    /// `TRIAL_PERIOD_DAYS` later.
    pub fn new(principal: PrincipalId, started_at: Timestamp) -> Self {
        Self {
            principal,
            started_at,
            ends_at: started_at.plus_days(TRIAL_PERIOD_DAYS),
        }
    }

    /// Whether the trial window contains `now`.
    ///
    /// The window is half-open: active while `now < ends_at`, expired the
    /// instant `now == ends_at`.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        now.is_before(&self.ends_at)
    }
}
