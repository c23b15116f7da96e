//! Plan catalog configuration.
//!
//! The allotment table injected into the entitlement engine. Allotments are
//! immutable data, not per-call-site literals; the shipped defaults below
//! can be overridden through the environment like any other configuration.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::entitlement::{Allotment, PlanTier};

/// Per-tier allotment table.
///
/// # Shipped Configuration
///
/// | Tier  | Tutors | Interviews/mo | Stories/mo | Resume | Reporting | Priority |
/// |-------|--------|---------------|------------|--------|-----------|----------|
/// | Free  | 3      | 3             | 5          | No     | No        | No       |
/// | Basic | 10     | 10            | 30         | Yes    | No        | No       |
/// | Pro   | 25     | 60            | 120        | Yes    | Yes       | Yes      |
/// | Trial | 3      | 3             | 5          | No     | No        | No       |
///
/// The trial row intentionally equals the free row: the observed product
/// behavior is that a trial grants no more than free. It is carried as its
/// own entry so the two can diverge without code changes.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanCatalog {
    #[serde(default = "default_free")]
    pub free: Allotment,

    #[serde(default = "default_basic")]
    pub basic: Allotment,

    #[serde(default = "default_pro")]
    pub pro: Allotment,

    #[serde(default = "default_trial")]
    pub trial: Allotment,
}

impl PlanCatalog {
    /// The allotment for a resolved plan tier.
    pub fn allotment_for(&self, tier: PlanTier) -> Allotment {
        match tier {
            PlanTier::Free => self.free,
            PlanTier::Basic => self.basic,
            PlanTier::Pro => self.pro,
        }
    }

    /// The allotment substituted while a trial window is active.
    pub fn trial_allotment(&self) -> Allotment {
        self.trial
    }

    /// Validate that the numeric ladder is monotonic across paid tiers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.free.tutor_limit > self.basic.tutor_limit
            || self.free.interviews_per_month > self.basic.interviews_per_month
            || self.free.stories_per_month > self.basic.stories_per_month
        {
            return Err(ValidationError::NonMonotonicAllotment("free"));
        }
        if self.basic.tutor_limit > self.pro.tutor_limit
            || self.basic.interviews_per_month > self.pro.interviews_per_month
            || self.basic.stories_per_month > self.pro.stories_per_month
        {
            return Err(ValidationError::NonMonotonicAllotment("basic"));
        }
        Ok(())
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self {
            free: default_free(),
            basic: default_basic(),
            pro: default_pro(),
            trial: default_trial(),
        }
    }
}

fn default_free() -> Allotment {
    Allotment {
        tutor_limit: 3,
        interviews_per_month: 3,
        stories_per_month: 5,
        resume_analysis: false,
        advanced_reporting: false,
        priority_support: false,
    }
}

fn default_basic() -> Allotment {
    Allotment {
        tutor_limit: 10,
        interviews_per_month: 10,
        stories_per_month: 30,
        resume_analysis: true,
        advanced_reporting: false,
        priority_support: false,
    }
}

fn default_pro() -> Allotment {
    Allotment {
        tutor_limit: 25,
        interviews_per_month: 60,
        stories_per_month: 120,
        resume_analysis: true,
        advanced_reporting: true,
        priority_support: true,
    }
}

fn default_trial() -> Allotment {
    default_free()
}
