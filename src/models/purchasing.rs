// src/models/purchasing.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Supplier directory entry. Purchase orders and tax handling live outside
// this service.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Uuid,

    #[schema(ignore)]
    pub tenant_id: Uuid,

    #[schema(example = "Malabar Linen Co.")]
    pub name: String,

    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,

    #[schema(example = "32AAECM1234F1Z5")]
    pub gstin: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierPayload {
    #[validate(length(min = 1, message = "Supplier name is required."))]
    pub name: String,

    pub contact_name: Option<String>,
    pub phone: Option<String>,

    #[validate(email(message = "The e-mail provided is invalid."))]
    pub email: Option<String>,

    #[validate(length(min = 15, max = 15, message = "GSTIN must be 15 characters."))]
    pub gstin: Option<String>,
}
