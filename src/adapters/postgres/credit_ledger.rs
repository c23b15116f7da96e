//! PostgreSQL implementation of CreditLedger.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::PrincipalId;
use crate::ports::{CreditLedger, StoreError};

/// PostgreSQL implementation of the CreditLedger port.
///
/// The increment is one upsert statement, so concurrent grants serialize
/// inside the database: no application-level read-modify-write, no lost
/// updates. The `CHECK (balance >= 0)` constraint backs the non-negative
/// invariant at the storage layer.
pub struct PostgresCreditLedger {
    pool: PgPool,
}

impl PostgresCreditLedger {
    /// Creates a new PostgresCreditLedger with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_balance(raw: i32) -> Result<u32, StoreError> {
    u32::try_from(raw).map_err(|_| StoreError::malformed("negative credit balance"))
}

#[async_trait]
impl CreditLedger for PostgresCreditLedger {
    async fn balance(&self, principal: &PrincipalId) -> Result<u32, StoreError> {
        let balance: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT balance
            FROM credit_ledger
            WHERE principal_id = $1
            "#,
        )
        .bind(principal.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        balance.map_or(Ok(0), to_balance)
    }

    async fn increment(&self, principal: &PrincipalId, delta: u32) -> Result<u32, StoreError> {
        let delta = i32::try_from(delta)
            .map_err(|_| StoreError::malformed("credit delta exceeds i32"))?;

        let balance: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO credit_ledger (principal_id, balance, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (principal_id)
            DO UPDATE SET balance = credit_ledger.balance + EXCLUDED.balance,
                          updated_at = now()
            RETURNING balance
            "#,
        )
        .bind(principal.as_str())
        .bind(delta)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        to_balance(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_balance_accepts_non_negative() {
        assert_eq!(to_balance(0).unwrap(), 0);
        assert_eq!(to_balance(42).unwrap(), 42);
    }

    #[test]
    fn to_balance_rejects_negative() {
        assert!(to_balance(-1).is_err());
    }
}
