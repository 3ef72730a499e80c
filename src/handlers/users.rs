// src/handlers/users.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{PermUsersManage, PermUsersRead, RequirePermission},
        tenancy::TenantContext,
    },
    models::auth::CreateUserPayload,
};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Staff of the active property",
         body = Vec<crate::models::auth::User>)
    ),
    params(
        ("x-tenant-id" = uuid::Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermUsersRead>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_repo.list_by_tenant(tenant.0).await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Staff user created", body = crate::models::auth::User),
        (status = 409, description = "E-mail already in use")
    ),
    params(
        ("x-tenant-id" = uuid::Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermUsersManage>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = app_state
        .auth_service
        .create_staff_user(
            tenant.0,
            &payload.email,
            &payload.password,
            &payload.full_name,
            payload.role,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}
