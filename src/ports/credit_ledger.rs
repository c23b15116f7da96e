//! Interview credit ledger port.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::foundation::PrincipalId;

/// Port over the per-principal interview credit balance.
///
/// Credits are non-expiring bonus interview allowance, folded additively
/// into the base plan allotment by the decision engine. There is no
/// consumption path: balances only grow.
///
/// # Contract
///
/// - `balance` returns 0 for a principal with no ledger entry.
/// - `increment` must be a single atomic datastore operation (a database
///   `UPDATE .. SET balance = balance + delta` or an equivalent
///   compare-and-swap loop). A read-modify-write in application code loses
///   updates under concurrent grants: N concurrent increments must always
///   raise the balance by exactly N.
#[async_trait]
pub trait CreditLedger: Send + Sync {
    /// Current credit balance; 0 if no entry exists.
    async fn balance(&self, principal: &PrincipalId) -> Result<u32, StoreError>;

    /// Atomically adds `delta` credits, creating the entry if absent.
    /// Returns the new balance.
    async fn increment(&self, principal: &PrincipalId, delta: u32) -> Result<u32, StoreError>;
}
