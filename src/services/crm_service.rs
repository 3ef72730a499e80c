// src/services/crm_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CrmRepository,
    models::crm::{CreateCustomerPayload, Customer, CustomerDetail, UpdateCustomerPayload},
};

#[derive(Clone)]
pub struct CrmService {
    repo: CrmRepository,
    pool: PgPool,
}

impl CrmService {
    pub fn new(repo: CrmRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    // Customer plus its address children, in one transaction.
    pub async fn create_customer(
        &self,
        tenant_id: Uuid,
        payload: CreateCustomerPayload,
    ) -> Result<CustomerDetail, AppError> {
        let mut tx = self.pool.begin().await?;

        let customer = self
            .repo
            .create_customer(
                &mut *tx,
                tenant_id,
                &payload.full_name,
                payload.email.as_deref(),
                payload.phone.as_deref(),
                payload.notes.as_deref(),
            )
            .await?;

        let mut addresses = Vec::with_capacity(payload.addresses.len());
        for input in &payload.addresses {
            addresses.push(self.repo.insert_address(&mut *tx, customer.id, input).await?);
        }

        tx.commit().await?;

        Ok(CustomerDetail { customer, addresses })
    }

    pub async fn list_customers(&self, tenant_id: Uuid) -> Result<Vec<Customer>, AppError> {
        self.repo.list_customers(tenant_id).await
    }

    pub async fn get_customer(
        &self,
        tenant_id: Uuid,
        customer_id: Uuid,
    ) -> Result<CustomerDetail, AppError> {
        let customer = self
            .repo
            .find_customer(tenant_id, customer_id)
            .await?
            .ok_or(AppError::NotFound("Customer"))?;

        let addresses = self.repo.list_addresses(customer.id).await?;

        Ok(CustomerDetail { customer, addresses })
    }

    // Update replaces the scalar fields and the whole address set. Clearing
    // and re-inserting the children keeps the payload a plain document from
    // the frontend's point of view.
    pub async fn update_customer(
        &self,
        tenant_id: Uuid,
        customer_id: Uuid,
        payload: UpdateCustomerPayload,
    ) -> Result<CustomerDetail, AppError> {
        let mut tx = self.pool.begin().await?;

        let customer = self
            .repo
            .update_customer(
                &mut *tx,
                tenant_id,
                customer_id,
                &payload.full_name,
                payload.email.as_deref(),
                payload.phone.as_deref(),
                payload.notes.as_deref(),
            )
            .await?
            .ok_or(AppError::NotFound("Customer"))?;

        self.repo.delete_addresses(&mut *tx, customer.id).await?;

        let mut addresses = Vec::with_capacity(payload.addresses.len());
        for input in &payload.addresses {
            addresses.push(self.repo.insert_address(&mut *tx, customer.id, input).await?);
        }

        tx.commit().await?;

        Ok(CustomerDetail { customer, addresses })
    }

    // Cascade-safe delete: child rows first, parent second, one transaction.
    pub async fn delete_customer(
        &self,
        tenant_id: Uuid,
        customer_id: Uuid,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        self.repo.delete_addresses(&mut *tx, customer_id).await?;
        let deleted = self.repo.delete_customer(&mut *tx, tenant_id, customer_id).await?;

        if deleted == 0 {
            // Nothing to delete; the rollback also undoes the address wipe.
            return Err(AppError::NotFound("Customer"));
        }

        tx.commit().await?;
        Ok(())
    }
}
