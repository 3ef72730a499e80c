// src/db/crm_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::crm::{Address, AddressInput, Customer},
};

const CUSTOMER_COLUMNS: &str =
    "id, tenant_id, full_name, email, phone, notes, created_at, updated_at";

#[derive(Clone)]
pub struct CrmRepository {
    pool: PgPool,
}

impl CrmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CUSTOMERS
    // =========================================================================

    pub async fn create_customer<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customers (tenant_id, full_name, email, phone, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(tenant_id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(notes)
        .fetch_one(executor)
        .await?;

        Ok(customer)
    }

    pub async fn update_customer<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        customer_id: Uuid,
        full_name: &str,
        email: Option<&str>,
        phone: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Option<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            UPDATE customers
            SET full_name = $3, email = $4, phone = $5, notes = $6, updated_at = NOW()
            WHERE id = $1 AND tenant_id = $2
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(customer_id)
        .bind(tenant_id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(notes)
        .fetch_optional(executor)
        .await?;

        Ok(customer)
    }

    pub async fn find_customer(
        &self,
        tenant_id: Uuid,
        customer_id: Uuid,
    ) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1 AND tenant_id = $2"
        ))
        .bind(customer_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn list_customers(&self, tenant_id: Uuid) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE tenant_id = $1 ORDER BY full_name ASC"
        ))
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn delete_customer<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        customer_id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1 AND tenant_id = $2")
            .bind(customer_id)
            .bind(tenant_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    // =========================================================================
    //  ADDRESSES (child rows)
    // =========================================================================

    pub async fn insert_address<'e, E>(
        &self,
        executor: E,
        customer_id: Uuid,
        input: &AddressInput,
    ) -> Result<Address, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let address = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (customer_id, line1, line2, city, pincode, state_id, district_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, customer_id, line1, line2, city, pincode, state_id, district_id
            "#,
        )
        .bind(customer_id)
        .bind(&input.line1)
        .bind(&input.line2)
        .bind(&input.city)
        .bind(&input.pincode)
        .bind(input.state_id)
        .bind(input.district_id)
        .fetch_one(executor)
        .await?;

        Ok(address)
    }

    pub async fn list_addresses(&self, customer_id: Uuid) -> Result<Vec<Address>, AppError> {
        let addresses = sqlx::query_as::<_, Address>(
            r#"
            SELECT id, customer_id, line1, line2, city, pincode, state_id, district_id
            FROM addresses
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(addresses)
    }

    // Child rows must go before the parent row (cascade-safe delete is
    // handled here, not by the schema).
    pub async fn delete_addresses<'e, E>(
        &self,
        executor: E,
        customer_id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM addresses WHERE customer_id = $1")
            .bind(customer_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
