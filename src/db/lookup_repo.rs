// src/db/lookup_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::crm::{District, State},
};

// Read-only access to the state/district lookup tables.
#[derive(Clone)]
pub struct LookupRepository {
    pool: PgPool,
}

impl LookupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_states(&self) -> Result<Vec<State>, AppError> {
        let states =
            sqlx::query_as::<_, State>("SELECT id, name, code FROM states ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(states)
    }

    pub async fn list_districts(&self, state_id: Uuid) -> Result<Vec<District>, AppError> {
        let districts = sqlx::query_as::<_, District>(
            "SELECT id, state_id, name FROM districts WHERE state_id = $1 ORDER BY name ASC",
        )
        .bind(state_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(districts)
    }

    pub async fn state_exists(&self, state_id: Uuid) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM states WHERE id = $1)")
                .bind(state_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }
}
