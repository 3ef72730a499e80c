// src/handlers/tenancy.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::TenantContext,
};

#[utoipa::path(
    get,
    path = "/api/tenants/current",
    tag = "Tenancy",
    responses(
        (status = 200, description = "The active property", body = crate::models::tenancy::Tenant),
        (status = 404, description = "Tenant not found")
    ),
    params(
        ("x-tenant-id" = uuid::Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_current_tenant(
    State(app_state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let current = app_state
        .tenant_repo
        .find_by_id(tenant.0)
        .await?
        .ok_or(AppError::NotFound("Tenant"))?;

    Ok(Json(current))
}
