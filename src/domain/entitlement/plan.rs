//! Plan tier definitions.
//!
//! Represents the subscription tier levels available in TalkPrep.

use serde::{Deserialize, Serialize};

/// Subscription plan tier.
///
/// Determines feature access and usage allotments. The numbers themselves
/// live in the injected plan catalog, not on the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Free tier - entry-level allotments, good for evaluation.
    Free,

    /// Basic subscription tier.
    Basic,

    /// Pro subscription tier - highest allotments, all features.
    Pro,
}

impl PlanTier {
    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Free)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Basic => "Basic",
            PlanTier::Pro => "Pro",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = more features. Used for upgrade validation.
    pub fn rank(&self) -> u8 {
        match self {
            PlanTier::Free => 0,
            PlanTier::Basic => 1,
            PlanTier::Pro => 2,
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_tier_is_not_paid() {
        assert!(!PlanTier::Free.is_paid());
    }

    #[test]
    fn basic_and_pro_are_paid() {
        assert!(PlanTier::Basic.is_paid());
        assert!(PlanTier::Pro.is_paid());
    }

    #[test]
    fn display_names_are_correct() {
        assert_eq!(PlanTier::Free.display_name(), "Free");
        assert_eq!(PlanTier::Basic.display_name(), "Basic");
        assert_eq!(PlanTier::Pro.display_name(), "Pro");
    }

    #[test]
    fn ranks_are_ordered() {
        assert!(PlanTier::Free.rank() < PlanTier::Basic.rank());
        assert!(PlanTier::Basic.rank() < PlanTier::Pro.rank());
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&PlanTier::Basic).unwrap();
        assert_eq!(json, "\"basic\"");
    }

    #[test]
    fn tier_deserializes_from_lowercase() {
        let tier: PlanTier = serde_json::from_str("\"pro\"").unwrap();
        assert_eq!(tier, PlanTier::Pro);
    }
}
