//! TrialWindowEvaluator - decides whether a trial override is active.

use std::sync::Arc;

use tracing::warn;

use crate::domain::entitlement::Allotment;
use crate::domain::foundation::{PrincipalId, Timestamp};
use crate::ports::TrialStore;

/// Evaluates whether "now" falls inside a principal's 7-day trial window
/// and, if so, yields the trial allotment that overrides plan resolution.
///
/// Fail-open: a failed trial lookup (as opposed to "no record") returns
/// `None` so the decision falls through to the plan path. A trial-lookup
/// hiccup must never by itself block a paying user's rightful access.
pub struct TrialWindowEvaluator {
    trials: Arc<dyn TrialStore>,
    trial_allotment: Allotment,
}

impl TrialWindowEvaluator {
    pub fn new(trials: Arc<dyn TrialStore>, trial_allotment: Allotment) -> Self {
        Self {
            trials,
            trial_allotment,
        }
    }

    /// The trial allotment if the principal's trial window contains `now`,
    /// `None` otherwise (no record, expired window, or failed lookup).
    pub async fn active_allotment(
        &self,
        principal: &PrincipalId,
        now: Timestamp,
    ) -> Option<Allotment> {
        match self.trials.find_trial(principal).await {
            Ok(Some(trial)) if trial.is_active_at(now) => Some(self.trial_allotment),
            Ok(_) => None,
            Err(err) => {
                warn!(
                    principal = %principal,
                    error = %err,
                    "trial lookup failed; falling through to plan resolution"
                );
                None
            }
        }
    }
}
