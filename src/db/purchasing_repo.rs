// src/db/purchasing_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::purchasing::Supplier};

#[derive(Clone)]
pub struct PurchasingRepository {
    pool: PgPool,
}

impl PurchasingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_supplier<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        name: &str,
        contact_name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        gstin: Option<&str>,
    ) -> Result<Supplier, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (tenant_id, name, contact_name, phone, email, gstin)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, tenant_id, name, contact_name, phone, email, gstin, created_at
            "#,
        )
        .bind(tenant_id)
        .bind(name)
        .bind(contact_name)
        .bind(phone)
        .bind(email)
        .bind(gstin)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(
                        "A supplier with this name already exists.".to_string(),
                    );
                }
            }
            e.into()
        })?;

        Ok(supplier)
    }

    pub async fn list_suppliers(&self, tenant_id: Uuid) -> Result<Vec<Supplier>, AppError> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT id, tenant_id, name, contact_name, phone, email, gstin, created_at
            FROM suppliers
            WHERE tenant_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(suppliers)
    }
}
