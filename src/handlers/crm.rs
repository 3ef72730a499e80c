// src/handlers/crm.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{PermCustomersManage, PermCustomersRead, RequirePermission},
        tenancy::TenantContext,
    },
    models::crm::{CreateCustomerPayload, UpdateCustomerPayload},
};

#[utoipa::path(
    post,
    path = "/api/crm/customers",
    tag = "CRM",
    request_body = CreateCustomerPayload,
    responses(
        (status = 201, description = "Customer created", body = crate::models::crm::CustomerDetail),
        (status = 400, description = "Invalid payload")
    ),
    params(
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_customer(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermCustomersManage>,
    Json(payload): Json<CreateCustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let detail = app_state.crm_service.create_customer(tenant.0, payload).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

#[utoipa::path(
    get,
    path = "/api/crm/customers",
    tag = "CRM",
    responses(
        (status = 200, description = "Customers of the active property",
         body = Vec<crate::models::crm::Customer>)
    ),
    params(
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermCustomersRead>,
) -> Result<impl IntoResponse, AppError> {
    let customers = app_state.crm_service.list_customers(tenant.0).await?;
    Ok(Json(customers))
}

#[utoipa::path(
    get,
    path = "/api/crm/customers/{id}",
    tag = "CRM",
    responses(
        (status = 200, description = "Customer with addresses",
         body = crate::models::crm::CustomerDetail),
        (status = 404, description = "Customer not found")
    ),
    params(
        ("id" = Uuid, Path, description = "Customer id"),
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_customer(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermCustomersRead>,
    Path(customer_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let detail = app_state.crm_service.get_customer(tenant.0, customer_id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    put,
    path = "/api/crm/customers/{id}",
    tag = "CRM",
    request_body = UpdateCustomerPayload,
    responses(
        (status = 200, description = "Customer updated", body = crate::models::crm::CustomerDetail),
        (status = 404, description = "Customer not found")
    ),
    params(
        ("id" = Uuid, Path, description = "Customer id"),
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_customer(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermCustomersManage>,
    Path(customer_id): Path<Uuid>,
    Json(payload): Json<UpdateCustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let detail = app_state
        .crm_service
        .update_customer(tenant.0, customer_id, payload)
        .await?;

    Ok(Json(detail))
}

#[utoipa::path(
    delete,
    path = "/api/crm/customers/{id}",
    tag = "CRM",
    responses(
        (status = 204, description = "Customer and addresses deleted"),
        (status = 404, description = "Customer not found")
    ),
    params(
        ("id" = Uuid, Path, description = "Customer id"),
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_customer(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermCustomersManage>,
    Path(customer_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.crm_service.delete_customer(tenant.0, customer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
