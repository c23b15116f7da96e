//! CreditGrantService - the narrow credit mutator.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::PrincipalId;
use crate::ports::{CreditLedger, StoreError};

/// Grants bonus interview credits to a principal's ledger.
///
/// Invoked by external collaborators (e.g. after a completed interview
/// report), not by the decision engine. The underlying increment is a
/// single atomic datastore operation, so concurrent grants never lose
/// updates.
pub struct CreditGrantService {
    ledger: Arc<dyn CreditLedger>,
}

impl CreditGrantService {
    pub fn new(ledger: Arc<dyn CreditLedger>) -> Self {
        Self { ledger }
    }

    /// Adds one interview credit and returns the new balance.
    pub async fn grant_interview_credit(
        &self,
        principal: &PrincipalId,
    ) -> Result<u32, StoreError> {
        let balance = self.ledger.increment(principal, 1).await?;
        info!(principal = %principal, balance, "interview credit granted");
        Ok(balance)
    }
}
