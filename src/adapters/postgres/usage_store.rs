//! PostgreSQL implementation of UsageStore.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entitlement::ResourceType;
use crate::domain::foundation::{PrincipalId, Timestamp};
use crate::ports::{StoreError, UsageStore};

/// PostgreSQL implementation of the UsageStore port.
///
/// Counts run against the `(principal_id, resource_type, occurred_at)`
/// index, so a window count is a range scan, not a table scan.
pub struct PostgresUsageStore {
    pool: PgPool,
}

impl PostgresUsageStore {
    /// Creates a new PostgresUsageStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageStore for PostgresUsageStore {
    async fn count_events(
        &self,
        principal: &PrincipalId,
        resource: ResourceType,
        since: Timestamp,
    ) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM usage_events
            WHERE principal_id = $1
              AND resource_type = $2
              AND occurred_at >= $3
            "#,
        )
        .bind(principal.as_str())
        .bind(resource.as_str())
        .bind(since.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        u64::try_from(count).map_err(|_| StoreError::malformed("negative event count"))
    }

    async fn record(
        &self,
        principal: &PrincipalId,
        resource: ResourceType,
        occurred_at: Timestamp,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO usage_events (id, principal_id, resource_type, occurred_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(principal.as_str())
        .bind(resource.as_str())
        .bind(occurred_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Ok(())
    }
}
