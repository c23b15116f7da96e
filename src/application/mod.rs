//! Application layer - the entitlement decision components.
//!
//! This layer orchestrates the ports into the single parameterized
//! decision algorithm. Each component mirrors one collaborator concern:
//!
//! - `PlanResolver` - principal -> plan tier (degrades to free on failure)
//! - `TrialWindowEvaluator` - active-trial allotment override (fail-open)
//! - `UsageCounter` - windowed event counts (errors propagate, fail-closed
//!   at the engine)
//! - `EntitlementEngine` - the root decision engine
//! - `CreditGrantService` - the narrow +1 credit mutator

mod credit_grant;
mod entitlement_engine;
mod plan_resolver;
mod trial_window;
mod usage_counter;

pub use credit_grant::CreditGrantService;
pub use entitlement_engine::EntitlementEngine;
pub use plan_resolver::PlanResolver;
pub use trial_window::TrialWindowEvaluator;
pub use usage_counter::UsageCounter;
