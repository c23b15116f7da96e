//! Entitlement domain module.
//!
//! Vocabulary for usage metering and access decisions: plan tiers, their
//! allotments, metered resource types and counting windows, the 7-day trial
//! record, and the typed allow/deny decision handed back to callers.
//!
//! # Module Structure
//!
//! - `plan` - PlanTier subscription levels
//! - `allotment` - Per-tier feature allotments and limits
//! - `resource` - Metered resource types and their counting windows
//! - `trial` - TrialRecord and the fixed trial window
//! - `decision` - AccessDecision and denial reasons

mod allotment;
mod decision;
mod plan;
mod resource;
mod trial;

pub use allotment::{Allotment, PlanFeature};
pub use decision::{AccessDecision, DenialReason};
pub use plan::PlanTier;
pub use resource::{ResourceType, UsageWindow};
pub use trial::{TrialRecord, TRIAL_PERIOD_DAYS};
