// src/models/access.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Base role of a staff member. The role only provides the *default*
// permission set; per-user overrides are layered on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Receptionist,
    Cashier,
    Waiter,
    Housekeeping,
}

// The three states a permission key can be in for a given user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionState {
    Grant,
    Neutral,
    Revoke,
}

// The override row as stored, keyed by (tenant_id, user_id).
#[derive(Debug, Clone, FromRow)]
pub struct OverrideRecord {
    pub tenant_id: Uuid,
    pub user_id: Uuid,
    pub add_keys: Vec<String>,
    pub remove_keys: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

// Wire shape of an override record. A user without a stored row is
// represented with two empty lists (every key neutral).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverrideResponse {
    pub user_id: Uuid,

    #[schema(example = json!(["inventory.read"]))]
    pub add: Vec<String>,

    #[schema(example = json!(["customers.manage"]))]
    pub remove: Vec<String>,

    pub updated_at: Option<DateTime<Utc>>,
}

// Full replacement payload for PUT .../overrides.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOverridesPayload {
    #[schema(example = json!(["inventory.read"]))]
    pub add: Vec<String>,

    #[schema(example = json!([]))]
    pub remove: Vec<String>,
}

// Single-key toggle payload for PATCH .../overrides/{key}.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetOverridePayload {
    pub state: PermissionState,
}

// What GET /api/auth/permissions returns: the caller's base role plus the
// fully resolved effective set. Navigation visibility is derived from this
// on the client.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffectivePermissions {
    pub role: Role,

    #[schema(example = json!(["customers.read", "bookings.read"]))]
    pub granted: Vec<String>,
}
