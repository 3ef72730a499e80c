// src/handlers/purchasing.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{PermPurchasingManage, PermPurchasingRead, RequirePermission},
        tenancy::TenantContext,
    },
    models::purchasing::CreateSupplierPayload,
};

#[utoipa::path(
    post,
    path = "/api/purchasing/suppliers",
    tag = "Purchasing",
    request_body = CreateSupplierPayload,
    responses(
        (status = 201, description = "Supplier created",
         body = crate::models::purchasing::Supplier),
        (status = 409, description = "Supplier name already in use")
    ),
    params(
        ("x-tenant-id" = uuid::Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_supplier(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermPurchasingManage>,
    Json(payload): Json<CreateSupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let supplier = app_state
        .purchasing_repo
        .create_supplier(
            &app_state.db_pool,
            tenant.0,
            &payload.name,
            payload.contact_name.as_deref(),
            payload.phone.as_deref(),
            payload.email.as_deref(),
            payload.gstin.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(supplier)))
}

#[utoipa::path(
    get,
    path = "/api/purchasing/suppliers",
    tag = "Purchasing",
    responses(
        (status = 200, description = "Suppliers",
         body = Vec<crate::models::purchasing::Supplier>)
    ),
    params(
        ("x-tenant-id" = uuid::Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_suppliers(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermPurchasingRead>,
) -> Result<impl IntoResponse, AppError> {
    let suppliers = app_state.purchasing_repo.list_suppliers(tenant.0).await?;
    Ok(Json(suppliers))
}
