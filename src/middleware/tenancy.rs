// src/middleware/tenancy.rs

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use uuid::Uuid;

use crate::common::error::AppError;

// The frontend selects the active property through this header, populated
// from local storage on its side.
const TENANT_ID_HEADER: &str = "x-tenant-id";

// The tenant the request is scoped to.
#[derive(Debug, Clone, Copy)]
pub struct TenantContext(pub Uuid);

impl TenantContext {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let value = headers
            .get(TENANT_ID_HEADER)
            .ok_or(AppError::MissingTenantHeader)?;

        let value_str = value.to_str().map_err(|_| AppError::InvalidTenantHeader)?;
        let tenant_id = Uuid::parse_str(value_str).map_err(|_| AppError::InvalidTenantHeader)?;

        Ok(TenantContext(tenant_id))
    }
}

impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // tenant_guard already inserted a verified context for guarded
        // routes; fall back to the raw header otherwise.
        if let Some(ctx) = parts.extensions.get::<TenantContext>() {
            return Ok(*ctx);
        }
        Self::from_headers(&parts.headers)
    }
}
