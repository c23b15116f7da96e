//! In-memory adapters for the datastore ports.
//!
//! For tests and local development, mirroring the production adapters'
//! contracts: absence vs failure are distinct, the credit increment is
//! atomic under concurrent grants, and failure can be injected per store
//! to exercise the fail-open/fail-closed paths.

mod credit_ledger;
mod subscription_directory;
mod trial_store;
mod usage_store;

pub use credit_ledger::MemoryCreditLedger;
pub use subscription_directory::MemorySubscriptionDirectory;
pub use trial_store::MemoryTrialStore;
pub use usage_store::MemoryUsageStore;
