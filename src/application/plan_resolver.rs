//! PlanResolver - maps a principal to a subscription tier.

use std::sync::Arc;

use tracing::warn;

use crate::domain::entitlement::PlanTier;
use crate::domain::foundation::PrincipalId;
use crate::ports::{PlanTag, SubscriptionDirectory};

/// Resolves a principal's plan tier from subscription tags.
///
/// Pro wins over Basic; a principal with neither tag is Free. Side-effect
/// free, no caching. Tag-lookup failure degrades to Free rather than
/// failing the decision: the most restrictive known-good allotment is the
/// fair fallback when the directory cannot answer.
pub struct PlanResolver {
    directory: Arc<dyn SubscriptionDirectory>,
}

impl PlanResolver {
    pub fn new(directory: Arc<dyn SubscriptionDirectory>) -> Self {
        Self { directory }
    }

    /// Resolve the plan tier for an authenticated principal.
    pub async fn resolve(&self, principal: &PrincipalId) -> PlanTier {
        for (tag, tier) in [(PlanTag::Pro, PlanTier::Pro), (PlanTag::Basic, PlanTier::Basic)] {
            match self.directory.has_plan_tag(principal, tag).await {
                Ok(true) => return tier,
                Ok(false) => {}
                Err(err) => {
                    warn!(
                        principal = %principal,
                        tag = tag.as_str(),
                        error = %err,
                        "plan tag lookup failed; resolving to free tier"
                    );
                    return PlanTier::Free;
                }
            }
        }
        PlanTier::Free
    }
}
