// src/db/access_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::access::OverrideRecord};

// Persistence for the per-user permission override rows, keyed by
// (tenant_id, user_id). A missing row means "no overrides".
#[derive(Clone)]
pub struct AccessRepository {
    pool: PgPool,
}

impl AccessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_overrides(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<OverrideRecord>, AppError> {
        let record = sqlx::query_as::<_, OverrideRecord>(
            r#"
            SELECT tenant_id, user_id, add_keys, remove_keys, updated_at
            FROM permission_overrides
            WHERE tenant_id = $1 AND user_id = $2
            "#,
        )
        .bind(tenant_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    // Full replacement of both lists for one user.
    pub async fn upsert_overrides<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        user_id: Uuid,
        add_keys: &[String],
        remove_keys: &[String],
    ) -> Result<OverrideRecord, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let record = sqlx::query_as::<_, OverrideRecord>(
            r#"
            INSERT INTO permission_overrides (tenant_id, user_id, add_keys, remove_keys)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (tenant_id, user_id)
            DO UPDATE SET
                add_keys = EXCLUDED.add_keys,
                remove_keys = EXCLUDED.remove_keys,
                updated_at = NOW()
            RETURNING tenant_id, user_id, add_keys, remove_keys, updated_at
            "#,
        )
        .bind(tenant_id)
        .bind(user_id)
        .bind(add_keys)
        .bind(remove_keys)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }
}
