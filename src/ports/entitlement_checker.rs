//! Entitlement checking port for metered operations.
//!
//! This is the contract the rest of the application consumes to gate tutor
//! creation and session starts.
//!
//! # Design
//!
//! The checker is deliberately asymmetric about failure:
//!
//! - Plan and trial resolution degrade to the most restrictive known-good
//!   allotment (free tier) - a lookup hiccup there must not lock out a
//!   paying user.
//! - Usage counting and credit reads **fail closed**: if consumed quota
//!   cannot be verified, the action is denied, never treated as unused.
//!
//! A denial is an expected outcome carrying a typed reason, which callers
//! route to the upgrade/limit-reached flow.
//!
//! # Example
//!
//! ```ignore
//! use talkprep::ports::EntitlementChecker;
//!
//! async fn start_interview(
//!     checker: &dyn EntitlementChecker,
//!     principal: Option<&PrincipalId>,
//! ) -> Result<(), DenialReason> {
//!     checker.can_start_interview(principal).await.into_result()?;
//!     // ... start the session, then record the usage event
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::domain::entitlement::{AccessDecision, Allotment, PlanFeature, ResourceType};
use crate::domain::foundation::PrincipalId;

/// Port for entitlement decisions on metered actions.
#[async_trait]
pub trait EntitlementChecker: Send + Sync {
    /// Decide whether the principal may consume one unit of `resource` now.
    ///
    /// `None` principal means unauthenticated and is always denied.
    async fn can_consume(
        &self,
        principal: Option<&PrincipalId>,
        resource: ResourceType,
    ) -> AccessDecision;

    /// Check if the principal can create a new tutor (standing cap).
    async fn can_create_tutor(&self, principal: Option<&PrincipalId>) -> AccessDecision {
        self.can_consume(principal, ResourceType::Tutor).await
    }

    /// Check if the principal can start an interview session this month.
    /// Interview credits fold into the base allotment.
    async fn can_start_interview(&self, principal: Option<&PrincipalId>) -> AccessDecision {
        self.can_consume(principal, ResourceType::Interview).await
    }

    /// Check if the principal can start a story session this month.
    async fn can_start_story(&self, principal: Option<&PrincipalId>) -> AccessDecision {
        self.can_consume(principal, ResourceType::Story).await
    }

    /// The principal's effective allotment, for display.
    ///
    /// Never touches the usage counter; degrades to the free allotment on
    /// resolution errors and to the locked allotment when unauthenticated.
    async fn plan_features(&self, principal: Option<&PrincipalId>) -> Allotment;

    /// Whether a boolean plan feature is included for the principal.
    async fn has_feature(
        &self,
        principal: Option<&PrincipalId>,
        feature: PlanFeature,
    ) -> bool {
        self.plan_features(principal).await.has_feature(feature)
    }

    /// Current-window usage plus credit balance, for display.
    ///
    /// Unlike the decision path this propagates store errors; display
    /// callers choose how to render an unavailable snapshot.
    async fn usage_snapshot(&self, principal: &PrincipalId)
        -> Result<UsageSnapshot, StoreError>;
}

/// Current usage statistics for a principal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Tutors owned (all-time).
    pub tutors_owned: u64,
    /// Interview sessions started this calendar month.
    pub interviews_this_month: u64,
    /// Story sessions started this calendar month.
    pub stories_this_month: u64,
    /// Non-expiring interview credits.
    pub interview_credits: u32,
}

impl UsageSnapshot {
    /// Usage counted against a resource's current window.
    pub fn used_for(&self, resource: ResourceType) -> u64 {
        match resource {
            ResourceType::Tutor => self.tutors_owned,
            ResourceType::Interview => self.interviews_this_month,
            ResourceType::Story => self.stories_this_month,
        }
    }
}
