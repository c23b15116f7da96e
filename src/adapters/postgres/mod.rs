//! PostgreSQL adapters for the datastore ports.
//!
//! # Expected Schema
//!
//! ```sql
//! CREATE TABLE subscriptions (
//!     principal_id TEXT PRIMARY KEY,
//!     plan_tags    TEXT[] NOT NULL DEFAULT '{}',
//!     updated_at   TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//!
//! CREATE TABLE trials (
//!     principal_id TEXT PRIMARY KEY,
//!     started_at   TIMESTAMPTZ NOT NULL,
//!     ends_at      TIMESTAMPTZ NOT NULL
//! );
//!
//! CREATE TABLE usage_events (
//!     id            UUID PRIMARY KEY,
//!     principal_id  TEXT NOT NULL,
//!     resource_type TEXT NOT NULL,
//!     occurred_at   TIMESTAMPTZ NOT NULL
//! );
//! CREATE INDEX usage_events_window_idx
//!     ON usage_events (principal_id, resource_type, occurred_at);
//!
//! CREATE TABLE credit_ledger (
//!     principal_id TEXT PRIMARY KEY,
//!     balance      INTEGER NOT NULL CHECK (balance >= 0),
//!     updated_at   TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```
//!
//! `usage_events.resource_type` is the explicit discriminator; rows are
//! append-only and never reclassified after insert.

mod credit_ledger;
mod subscription_directory;
mod trial_store;
mod usage_store;

pub use credit_ledger::PostgresCreditLedger;
pub use subscription_directory::PostgresSubscriptionDirectory;
pub use trial_store::PostgresTrialStore;
pub use usage_store::PostgresUsageStore;
