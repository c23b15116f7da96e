//! Access decision types returned to callers.
//!
//! A denial is a routable outcome (upgrade / limit-reached flow), never a
//! generic failure, so the reason is typed and serializable.

use serde::{Deserialize, Serialize};

use super::ResourceType;

/// Outcome of an entitlement check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The metered action is permitted.
    Allowed,
    /// The metered action is denied with a specific reason.
    Denied(DenialReason),
}

impl AccessDecision {
    /// Returns true if the action is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }

    /// Returns true if the action is denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, AccessDecision::Denied(_))
    }

    /// Converts the decision to a Result, with denial becoming an error.
    pub fn into_result(self) -> Result<(), DenialReason> {
        match self {
            AccessDecision::Allowed => Ok(()),
            AccessDecision::Denied(reason) => Err(reason),
        }
    }
}

/// Reason why a metered action was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DenialReason {
    /// No authenticated principal.
    Unauthenticated,

    /// Consumed usage has reached the effective allotment.
    LimitReached {
        /// Resource the principal tried to consume.
        resource: ResourceType,
        /// Usage counted in the current window.
        used: u64,
        /// Effective limit (base allotment plus any credits).
        allowed: u64,
    },

    /// Consumed usage or credit balance could not be verified.
    ///
    /// An unverifiable quota is denied outright rather than treated as
    /// zero consumed.
    QuotaUnverifiable,
}

impl DenialReason {
    /// Get a user-facing message for the denial reason.
    pub fn user_message(&self) -> String {
        match self {
            DenialReason::Unauthenticated => {
                "Please sign in to use this feature.".to_string()
            }
            DenialReason::LimitReached { resource, used, allowed } => {
                format!(
                    "You've reached your limit of {} {} (used {}). Upgrade for more.",
                    allowed,
                    resource.display_name(),
                    used
                )
            }
            DenialReason::QuotaUnverifiable => {
                "We couldn't verify your remaining usage. Please try again shortly.".to_string()
            }
        }
    }
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}
