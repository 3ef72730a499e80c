// src/handlers/access.rs
//
// Access-control settings: per-user permission overrides. Everything here
// is gated behind settings.access.manage.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{PermAccessManage, RequirePermission},
        tenancy::TenantContext,
    },
    models::access::{SetOverridePayload, UpdateOverridesPayload},
};

#[utoipa::path(
    get,
    path = "/api/settings/access/users/{id}/overrides",
    tag = "Access Control",
    responses(
        (status = 200, description = "The user's override lists",
         body = crate::models::access::OverrideResponse),
        (status = 404, description = "User not found in this property")
    ),
    params(
        ("id" = Uuid, Path, description = "Target user"),
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_user_overrides(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermAccessManage>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let overrides = app_state.access_service.get_overrides(tenant.0, user_id).await?;
    Ok(Json(overrides))
}

#[utoipa::path(
    put,
    path = "/api/settings/access/users/{id}/overrides",
    tag = "Access Control",
    request_body = UpdateOverridesPayload,
    responses(
        (status = 200, description = "Overrides replaced",
         body = crate::models::access::OverrideResponse),
        (status = 400, description = "Unknown key or key present in both lists"),
        (status = 404, description = "User not found in this property")
    ),
    params(
        ("id" = Uuid, Path, description = "Target user"),
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn put_user_overrides(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermAccessManage>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateOverridesPayload>,
) -> Result<impl IntoResponse, AppError> {
    let overrides = app_state
        .access_service
        .put_overrides(tenant.0, user_id, payload.add, payload.remove)
        .await?;

    Ok(Json(overrides))
}

// Single-key toggle: grant / neutral / revoke. Neutral clears the key from
// both lists and the role default applies again.
#[utoipa::path(
    patch,
    path = "/api/settings/access/users/{id}/overrides/{key}",
    tag = "Access Control",
    request_body = SetOverridePayload,
    responses(
        (status = 200, description = "Key state updated",
         body = crate::models::access::OverrideResponse),
        (status = 400, description = "Unknown permission key"),
        (status = 404, description = "User not found in this property")
    ),
    params(
        ("id" = Uuid, Path, description = "Target user"),
        ("key" = String, Path, description = "Permission key, e.g. inventory.read"),
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn patch_user_override(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermAccessManage>,
    Path((user_id, key)): Path<(Uuid, String)>,
    Json(payload): Json<SetOverridePayload>,
) -> Result<impl IntoResponse, AppError> {
    let overrides = app_state
        .access_service
        .set_override_state(tenant.0, user_id, &key, payload.state)
        .await?;

    Ok(Json(overrides))
}
