//! In-memory implementation of CreditLedger.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::PrincipalId;
use crate::ports::{CreditLedger, StoreError};

/// In-memory CreditLedger for tests and local development.
///
/// The whole increment happens under one lock, matching the atomicity
/// the production adapter gets from a single upsert statement: N
/// concurrent grants raise the balance by exactly N.
#[derive(Default)]
pub struct MemoryCreditLedger {
    balances: Mutex<HashMap<String, u32>>,
    fail: AtomicBool,
}

impl MemoryCreditLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent operations fail with `StoreError::Unavailable`.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CreditLedger for MemoryCreditLedger {
    async fn balance(&self, principal: &PrincipalId) -> Result<u32, StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("simulated ledger outage"));
        }
        Ok(self
            .balances
            .lock()
            .expect("ledger lock poisoned")
            .get(principal.as_str())
            .copied()
            .unwrap_or(0))
    }

    async fn increment(&self, principal: &PrincipalId, delta: u32) -> Result<u32, StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("simulated ledger outage"));
        }
        let mut balances = self.balances.lock().expect("ledger lock poisoned");
        let balance = balances.entry(principal.as_str().to_string()).or_insert(0);
        *balance += delta;
        Ok(*balance)
    }
}
