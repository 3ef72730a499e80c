// src/middleware/rbac.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, tenancy::TenantContext},
    services::access_service,
};

/// A permission requirement, named as a type so routes can declare it in
/// their signature.
pub trait PermissionDef: Send + Sync + 'static {
    fn slug() -> &'static str;
}

/// The gate. Adding `RequirePermission<PermX>` to a handler rejects the
/// request with 403 unless the caller's effective set contains the key.
/// Stacking several of them gives require-ALL semantics.
pub struct RequirePermission<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequirePermission<T>
where
    T: PermissionDef,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let AuthenticatedUser(user) =
            AuthenticatedUser::from_request_parts(parts, state).await?;
        let tenant = TenantContext::from_request_parts(parts, state).await?;

        // tenant_guard verified membership already; keep the invariant local.
        if user.tenant_id != tenant.0 {
            return Err(AppError::TenantAccessDenied);
        }

        app_state
            .access_service
            .require_all(&user, &[T::slug()])
            .await?;

        Ok(RequirePermission(PhantomData))
    }
}

// ---
// PERMISSION TYPES
// ---

pub struct PermUsersRead;
impl PermissionDef for PermUsersRead {
    fn slug() -> &'static str { access_service::PERM_USERS_READ }
}

pub struct PermUsersManage;
impl PermissionDef for PermUsersManage {
    fn slug() -> &'static str { access_service::PERM_USERS_MANAGE }
}

pub struct PermCustomersRead;
impl PermissionDef for PermCustomersRead {
    fn slug() -> &'static str { access_service::PERM_CUSTOMERS_READ }
}

pub struct PermCustomersManage;
impl PermissionDef for PermCustomersManage {
    fn slug() -> &'static str { access_service::PERM_CUSTOMERS_MANAGE }
}

pub struct PermBookingsRead;
impl PermissionDef for PermBookingsRead {
    fn slug() -> &'static str { access_service::PERM_BOOKINGS_READ }
}

pub struct PermBookingsManage;
impl PermissionDef for PermBookingsManage {
    fn slug() -> &'static str { access_service::PERM_BOOKINGS_MANAGE }
}

pub struct PermInventoryRead;
impl PermissionDef for PermInventoryRead {
    fn slug() -> &'static str { access_service::PERM_INVENTORY_READ }
}

pub struct PermInventoryManage;
impl PermissionDef for PermInventoryManage {
    fn slug() -> &'static str { access_service::PERM_INVENTORY_MANAGE }
}

pub struct PermPurchasingRead;
impl PermissionDef for PermPurchasingRead {
    fn slug() -> &'static str { access_service::PERM_PURCHASING_READ }
}

pub struct PermPurchasingManage;
impl PermissionDef for PermPurchasingManage {
    fn slug() -> &'static str { access_service::PERM_PURCHASING_MANAGE }
}

pub struct PermAccessManage;
impl PermissionDef for PermAccessManage {
    fn slug() -> &'static str { access_service::PERM_ACCESS_MANAGE }
}
