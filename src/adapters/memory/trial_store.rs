//! In-memory implementation of TrialStore.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entitlement::TrialRecord;
use crate::domain::foundation::{PrincipalId, Timestamp};
use crate::ports::{StoreError, TrialStore};

/// In-memory TrialStore for tests and local development.
///
/// Honors the create-once contract: `start_trial` never replaces an
/// existing record.
#[derive(Default)]
pub struct MemoryTrialStore {
    records: RwLock<HashMap<String, TrialRecord>>,
    fail: AtomicBool,
}

impl MemoryTrialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent lookups fail with `StoreError::Unavailable`.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl TrialStore for MemoryTrialStore {
    async fn find_trial(
        &self,
        principal: &PrincipalId,
    ) -> Result<Option<TrialRecord>, StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("simulated trial store outage"));
        }
        Ok(self
            .records
            .read()
            .expect("trial lock poisoned")
            .get(principal.as_str())
            .cloned())
    }

    async fn start_trial(
        &self,
        principal: &PrincipalId,
        now: Timestamp,
    ) -> Result<TrialRecord, StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("simulated trial store outage"));
        }
        let mut records = self.records.write().expect("trial lock poisoned");
        let record = records
            .entry(principal.as_str().to_string())
            .or_insert_with(|| TrialRecord::new(principal.clone(), now));
        Ok(record.clone())
    }
}
