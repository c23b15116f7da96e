//! PostgreSQL implementation of SubscriptionDirectory.
//!
//! Plan tags are synced into the `subscriptions` table by the billing
//! integration; this adapter only reads them.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::PrincipalId;
use crate::ports::{PlanTag, StoreError, SubscriptionDirectory};

/// PostgreSQL implementation of the SubscriptionDirectory port.
pub struct PostgresSubscriptionDirectory {
    pool: PgPool,
}

impl PostgresSubscriptionDirectory {
    /// Creates a new PostgresSubscriptionDirectory with the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionDirectory for PostgresSubscriptionDirectory {
    async fn has_plan_tag(
        &self,
        principal: &PrincipalId,
        tag: PlanTag,
    ) -> Result<bool, StoreError> {
        let tagged: Option<bool> = sqlx::query_scalar(
            r#"
            SELECT $2 = ANY(plan_tags)
            FROM subscriptions
            WHERE principal_id = $1
            "#,
        )
        .bind(principal.as_str())
        .bind(tag.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        // No subscription row means no tags.
        Ok(tagged.unwrap_or(false))
    }
}
