//! Subscription directory port for plan tag lookup.
//!
//! The identity/subscription collaborator owns which paid plan a principal
//! is on; it exposes that as tags. Resolving the current principal from a
//! request session belongs to the web layer, not this crate - the engine
//! receives an already-resolved (or absent) principal.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::domain::foundation::PrincipalId;

/// Paid plan tags the identity collaborator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTag {
    Pro,
    Basic,
}

impl PlanTag {
    /// Stable lowercase name, matching the collaborator's tag value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTag::Pro => "pro",
            PlanTag::Basic => "basic",
        }
    }
}

/// Port for querying a principal's subscription tags.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(false)` for a principal with no subscription record
/// - Return `Err(StoreError)` only when the lookup itself fails; the plan
///   resolver degrades that to the free tier rather than denying
#[async_trait]
pub trait SubscriptionDirectory: Send + Sync {
    /// Whether the principal currently carries the given plan tag.
    async fn has_plan_tag(
        &self,
        principal: &PrincipalId,
        tag: PlanTag,
    ) -> Result<bool, StoreError>;
}
