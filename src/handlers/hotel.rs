// src/handlers/hotel.rs

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
        rbac::{
            PermBookingsManage, PermBookingsRead, PermInventoryManage, PermInventoryRead,
            RequirePermission,
        },
        tenancy::TenantContext,
    },
    models::hotel::{
        CreateBookingPayload, CreateRoomPayload, CreateRoomTypePayload,
        UpdateBookingStatusPayload, UpdateRoomStatusPayload,
    },
};

// =========================================================================
//  ROOM TYPES
// =========================================================================

#[utoipa::path(
    post,
    path = "/api/hotel/room-types",
    tag = "Hotel",
    request_body = CreateRoomTypePayload,
    responses(
        (status = 201, description = "Room type created", body = crate::models::hotel::RoomType),
        (status = 409, description = "Name already in use")
    ),
    params(
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_room_type(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermInventoryManage>,
    Json(payload): Json<CreateRoomTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let room_type = app_state.hotel_service.create_room_type(tenant.0, payload).await?;
    Ok((StatusCode::CREATED, Json(room_type)))
}

#[utoipa::path(
    get,
    path = "/api/hotel/room-types",
    tag = "Hotel",
    responses(
        (status = 200, description = "Room types", body = Vec<crate::models::hotel::RoomType>)
    ),
    params(
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_room_types(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermInventoryRead>,
) -> Result<impl IntoResponse, AppError> {
    let room_types = app_state.hotel_service.list_room_types(tenant.0).await?;
    Ok(Json(room_types))
}

// =========================================================================
//  ROOMS
// =========================================================================

#[utoipa::path(
    post,
    path = "/api/hotel/rooms",
    tag = "Hotel",
    request_body = CreateRoomPayload,
    responses(
        (status = 201, description = "Room created", body = crate::models::hotel::Room),
        (status = 404, description = "Room type not found"),
        (status = 409, description = "Room number already in use")
    ),
    params(
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_room(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermInventoryManage>,
    Json(payload): Json<CreateRoomPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let room = app_state.hotel_service.create_room(tenant.0, payload).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

#[utoipa::path(
    get,
    path = "/api/hotel/rooms",
    tag = "Hotel",
    responses(
        (status = 200, description = "Rooms", body = Vec<crate::models::hotel::Room>)
    ),
    params(
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_rooms(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermInventoryRead>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = app_state.hotel_service.list_rooms(tenant.0).await?;
    Ok(Json(rooms))
}

#[utoipa::path(
    patch,
    path = "/api/hotel/rooms/{id}/status",
    tag = "Hotel",
    request_body = UpdateRoomStatusPayload,
    responses(
        (status = 200, description = "Room status updated", body = crate::models::hotel::Room),
        (status = 404, description = "Room not found")
    ),
    params(
        ("id" = Uuid, Path, description = "Room id"),
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_room_status(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermInventoryManage>,
    Path(room_id): Path<Uuid>,
    Json(payload): Json<UpdateRoomStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let room = app_state
        .hotel_service
        .set_room_status(tenant.0, room_id, payload.status)
        .await?;

    Ok(Json(room))
}

// =========================================================================
//  BOOKINGS
// =========================================================================

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingPayload,
    responses(
        (status = 201, description = "Booking created", body = crate::models::hotel::Booking),
        (status = 400, description = "Invalid stay dates"),
        (status = 409, description = "Room unavailable for the requested dates")
    ),
    params(
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_booking(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermBookingsManage>,
    Json(payload): Json<CreateBookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state.hotel_service.create_booking(tenant.0, payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "Bookings", body = Vec<crate::models::hotel::Booking>)
    ),
    params(
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_bookings(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermBookingsRead>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = app_state.hotel_service.list_bookings(tenant.0).await?;
    Ok(Json(bookings))
}

#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/status",
    tag = "Bookings",
    request_body = UpdateBookingStatusPayload,
    responses(
        (status = 200, description = "Booking status updated",
         body = crate::models::hotel::Booking),
        (status = 404, description = "Booking not found")
    ),
    params(
        ("id" = Uuid, Path, description = "Booking id"),
        ("x-tenant-id" = Uuid, Header, description = "Active property")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_booking_status(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    _perm: RequirePermission<PermBookingsManage>,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<UpdateBookingStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state
        .hotel_service
        .set_booking_status(tenant.0, booking_id, payload.status)
        .await?;

    Ok(Json(booking))
}
