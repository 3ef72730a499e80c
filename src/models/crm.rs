// src/models/crm.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,

    #[schema(ignore)]
    pub tenant_id: Uuid,

    #[schema(example = "Ravi Menon")]
    pub full_name: String,

    #[schema(example = "ravi.menon@example.com")]
    pub email: Option<String>,

    #[schema(example = "+91 98450 12345")]
    pub phone: Option<String>,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// An address row. state_id/district_id reference the lookup tables.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: Uuid,

    #[schema(ignore)]
    pub customer_id: Uuid,

    #[schema(example = "12 Beach Road")]
    pub line1: String,

    pub line2: Option<String>,

    #[schema(example = "Kochi")]
    pub city: String,

    #[schema(example = "682001")]
    pub pincode: String,

    pub state_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
}

// Customer plus its address children, as returned by the detail routes.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: Customer,

    pub addresses: Vec<Address>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    #[validate(length(min = 1, message = "Address line 1 is required."))]
    pub line1: String,

    pub line2: Option<String>,

    #[validate(length(min = 1, message = "City is required."))]
    pub city: String,

    #[validate(length(min = 4, max = 10, message = "Pincode must be 4 to 10 characters."))]
    pub pincode: String,

    pub state_id: Option<Uuid>,
    pub district_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerPayload {
    #[validate(length(min = 1, message = "Customer name is required."))]
    pub full_name: String,

    #[validate(email(message = "The e-mail provided is invalid."))]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub notes: Option<String>,

    #[validate(nested)]
    #[serde(default)]
    pub addresses: Vec<AddressInput>,
}

// Update replaces the scalar fields and the whole address set.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerPayload {
    #[validate(length(min = 1, message = "Customer name is required."))]
    pub full_name: String,

    #[validate(email(message = "The e-mail provided is invalid."))]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub notes: Option<String>,

    #[validate(nested)]
    #[serde(default)]
    pub addresses: Vec<AddressInput>,
}

// ---
// Lookup tables (read-only, seeded by migration)
// ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: Uuid,

    #[schema(example = "Kerala")]
    pub name: String,

    #[schema(example = "KL")]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: Uuid,
    pub state_id: Uuid,

    #[schema(example = "Ernakulam")]
    pub name: String,
}
