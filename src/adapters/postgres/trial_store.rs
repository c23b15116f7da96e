//! PostgreSQL implementation of TrialStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entitlement::TrialRecord;
use crate::domain::foundation::{PrincipalId, Timestamp};
use crate::ports::{StoreError, TrialStore};

/// PostgreSQL implementation of the TrialStore port.
///
/// The `trials` row is written exactly once per principal; `start_trial`
/// relies on `ON CONFLICT DO NOTHING` against the primary key so a
/// concurrent first interaction cannot create a second window.
pub struct PostgresTrialStore {
    pool: PgPool,
}

impl PostgresTrialStore {
    /// Creates a new PostgresTrialStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TrialRow {
    started_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
}

impl TrialRow {
    fn into_record(self, principal: &PrincipalId) -> TrialRecord {
        TrialRecord {
            principal: principal.clone(),
            started_at: Timestamp::from_datetime(self.started_at),
            ends_at: Timestamp::from_datetime(self.ends_at),
        }
    }
}

#[async_trait]
impl TrialStore for PostgresTrialStore {
    async fn find_trial(
        &self,
        principal: &PrincipalId,
    ) -> Result<Option<TrialRecord>, StoreError> {
        let row: Option<TrialRow> = sqlx::query_as(
            r#"
            SELECT started_at, ends_at
            FROM trials
            WHERE principal_id = $1
            "#,
        )
        .bind(principal.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        Ok(row.map(|row| row.into_record(principal)))
    }

    async fn start_trial(
        &self,
        principal: &PrincipalId,
        now: Timestamp,
    ) -> Result<TrialRecord, StoreError> {
        let record = TrialRecord::new(principal.clone(), now);

        sqlx::query(
            r#"
            INSERT INTO trials (principal_id, started_at, ends_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (principal_id) DO NOTHING
            "#,
        )
        .bind(principal.as_str())
        .bind(record.started_at.as_datetime())
        .bind(record.ends_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(StoreError::unavailable)?;

        // Either our insert won or an earlier record exists; the stored
        // row is authoritative in both cases.
        self.find_trial(principal)
            .await?
            .ok_or_else(|| StoreError::malformed("trial row missing after insert"))
    }
}
