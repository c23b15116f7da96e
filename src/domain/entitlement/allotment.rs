//! Per-tier feature allotments.
//!
//! Defines what a principal can do under a given plan: numeric limits for
//! the metered resources and boolean feature flags. Allotments are static
//! configuration carried by the plan catalog, never persisted per-principal.

use serde::{Deserialize, Serialize};

use super::ResourceType;

/// Feature allotment for a plan tier.
///
/// Numeric limits are interpreted against each resource's counting window:
/// `tutor_limit` is a standing cap on owned tutors, the session limits are
/// per calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allotment {
    /// Maximum tutors a principal may own (all-time cap).
    pub tutor_limit: u32,
    /// Interview sessions allowed per calendar month.
    pub interviews_per_month: u32,
    /// Story sessions allowed per calendar month.
    pub stories_per_month: u32,
    /// Whether resume analysis is enabled.
    pub resume_analysis: bool,
    /// Whether advanced interview reporting is enabled.
    pub advanced_reporting: bool,
    /// Whether priority support is enabled.
    pub priority_support: bool,
}

/// Boolean plan features resolvable through the entitlement checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanFeature {
    ResumeAnalysis,
    AdvancedReporting,
    PrioritySupport,
}

impl Allotment {
    /// The all-zero sentinel for unauthenticated principals: no metered
    /// actions, no features.
    pub fn locked() -> Self {
        Self {
            tutor_limit: 0,
            interviews_per_month: 0,
            stories_per_month: 0,
            resume_analysis: false,
            advanced_reporting: false,
            priority_support: false,
        }
    }

    /// The base numeric limit for a resource under this allotment.
    ///
    /// Credits are folded in by the decision engine, not here.
    pub fn limit_for(&self, resource: ResourceType) -> u32 {
        match resource {
            ResourceType::Tutor => self.tutor_limit,
            ResourceType::Interview => self.interviews_per_month,
            ResourceType::Story => self.stories_per_month,
        }
    }

    /// Whether a boolean feature is included in this allotment.
    pub fn has_feature(&self, feature: PlanFeature) -> bool {
        match feature {
            PlanFeature::ResumeAnalysis => self.resume_analysis,
            PlanFeature::AdvancedReporting => self.advanced_reporting,
            PlanFeature::PrioritySupport => self.priority_support,
        }
    }
}

impl PlanFeature {
    /// Human-readable feature name for denial messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanFeature::ResumeAnalysis => "Resume analysis",
            PlanFeature::AdvancedReporting => "Advanced reporting",
            PlanFeature::PrioritySupport => "Priority support",
        }
    }
}
