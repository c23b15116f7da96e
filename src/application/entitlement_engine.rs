//! EntitlementEngine - the root entitlement decision component.
//!
//! Combines trial evaluation, plan resolution, usage counting, and the
//! credit ledger into one parameterized allow/deny decision. The per-call
//! sequence is:
//!
//! 1. unauthenticated -> deny
//! 2. effective allotment: active trial override, else resolved plan
//! 3. base limit for the resource
//! 4. usage count (and, for interviews, credit balance - read concurrently)
//! 5. allow iff `used < base + credits`
//!
//! Failure direction is asymmetric on purpose: trial/plan resolution
//! degrades to the free allotment, while an unverifiable usage count or
//! credit balance denies outright. The exploitable direction of error is
//! the one that under-counts consumption.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{PlanResolver, TrialWindowEvaluator, UsageCounter};
use crate::config::PlanCatalog;
use crate::domain::entitlement::{AccessDecision, Allotment, DenialReason, ResourceType};
use crate::domain::foundation::{PrincipalId, Timestamp};
use crate::ports::{
    CreditLedger, EntitlementChecker, StoreError, SubscriptionDirectory, TrialStore, UsageSnapshot,
    UsageStore,
};

/// The entitlement decision engine.
///
/// Construct once with the collaborator ports and the immutable plan
/// catalog; the engine performs no writes of its own, so an abandoned call
/// leaves no partial state behind.
pub struct EntitlementEngine {
    plans: PlanResolver,
    trials: TrialWindowEvaluator,
    usage: UsageCounter,
    credits: Arc<dyn CreditLedger>,
    catalog: PlanCatalog,
}

impl EntitlementEngine {
    pub fn new(
        directory: Arc<dyn SubscriptionDirectory>,
        trial_store: Arc<dyn TrialStore>,
        usage_store: Arc<dyn UsageStore>,
        credits: Arc<dyn CreditLedger>,
        catalog: PlanCatalog,
    ) -> Self {
        Self {
            plans: PlanResolver::new(directory),
            trials: TrialWindowEvaluator::new(trial_store, catalog.trial_allotment()),
            usage: UsageCounter::new(usage_store),
            credits,
            catalog,
        }
    }

    /// The allotment in force for the principal at `now`: the trial
    /// override while a trial window is active, the resolved plan's
    /// allotment otherwise. Resolution failures degrade inside the
    /// sub-components, so this cannot fail.
    async fn effective_allotment(&self, principal: &PrincipalId, now: Timestamp) -> Allotment {
        match self.trials.active_allotment(principal, now).await {
            Some(allotment) => allotment,
            None => self
                .catalog
                .allotment_for(self.plans.resolve(principal).await),
        }
    }

    /// Decision for one unit of `resource` as of `now`.
    ///
    /// Exposed with an explicit clock for tests; production callers go
    /// through [`EntitlementChecker::can_consume`].
    pub async fn can_consume_at(
        &self,
        principal: Option<&PrincipalId>,
        resource: ResourceType,
        now: Timestamp,
    ) -> AccessDecision {
        let Some(principal) = principal else {
            return AccessDecision::Denied(DenialReason::Unauthenticated);
        };

        let allotment = self.effective_allotment(principal, now).await;
        let base = u64::from(allotment.limit_for(resource));

        // The usage count and the credit read are independent round trips;
        // issue them together on the interview path.
        let (used, credits) = if resource.accepts_credits() {
            let (used, balance) = futures::join!(
                self.usage.count_current(principal, resource, now),
                self.credits.balance(principal)
            );
            match (used, balance) {
                (Ok(used), Ok(balance)) => (used, u64::from(balance)),
                (Err(err), _) | (_, Err(err)) => {
                    debug!(
                        principal = %principal,
                        resource = %resource,
                        error = %err,
                        "usage or credit read failed; denying (fail-closed)"
                    );
                    return AccessDecision::Denied(DenialReason::QuotaUnverifiable);
                }
            }
        } else {
            match self.usage.count_current(principal, resource, now).await {
                Ok(used) => (used, 0),
                Err(err) => {
                    debug!(
                        principal = %principal,
                        resource = %resource,
                        error = %err,
                        "usage count failed; denying (fail-closed)"
                    );
                    return AccessDecision::Denied(DenialReason::QuotaUnverifiable);
                }
            }
        };

        let allowed = base + credits;
        if used < allowed {
            AccessDecision::Allowed
        } else {
            debug!(
                principal = %principal,
                resource = %resource,
                used,
                allowed,
                "limit reached"
            );
            AccessDecision::Denied(DenialReason::LimitReached {
                resource,
                used,
                allowed,
            })
        }
    }

    /// Effective allotment for display as of `now`.
    ///
    /// Never consults the usage counter, so it cannot fail on quota
    /// counting; unauthenticated principals get the locked allotment.
    pub async fn plan_features_at(
        &self,
        principal: Option<&PrincipalId>,
        now: Timestamp,
    ) -> Allotment {
        match principal {
            None => Allotment::locked(),
            Some(principal) => self.effective_allotment(principal, now).await,
        }
    }

    /// Usage snapshot for display as of `now`. Store errors propagate.
    pub async fn usage_snapshot_at(
        &self,
        principal: &PrincipalId,
        now: Timestamp,
    ) -> Result<UsageSnapshot, StoreError> {
        let (tutors, interviews, stories, balance) = futures::join!(
            self.usage
                .count_current(principal, ResourceType::Tutor, now),
            self.usage
                .count_current(principal, ResourceType::Interview, now),
            self.usage.count_current(principal, ResourceType::Story, now),
            self.credits.balance(principal)
        );

        Ok(UsageSnapshot {
            tutors_owned: tutors?,
            interviews_this_month: interviews?,
            stories_this_month: stories?,
            interview_credits: balance?,
        })
    }
}

#[async_trait]
impl EntitlementChecker for EntitlementEngine {
    async fn can_consume(
        &self,
        principal: Option<&PrincipalId>,
        resource: ResourceType,
    ) -> AccessDecision {
        self.can_consume_at(principal, resource, Timestamp::now())
            .await
    }

    async fn plan_features(&self, principal: Option<&PrincipalId>) -> Allotment {
        self.plan_features_at(principal, Timestamp::now()).await
    }

    async fn usage_snapshot(
        &self,
        principal: &PrincipalId,
    ) -> Result<UsageSnapshot, StoreError> {
        self.usage_snapshot_at(principal, Timestamp::now()).await
    }
}
