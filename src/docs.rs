// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,
        handlers::auth::get_my_permissions,

        // --- Users ---
        handlers::users::list_users,
        handlers::users::create_user,

        // --- Access Control ---
        handlers::access::get_user_overrides,
        handlers::access::put_user_overrides,
        handlers::access::patch_user_override,

        // --- CRM ---
        handlers::crm::create_customer,
        handlers::crm::list_customers,
        handlers::crm::get_customer,
        handlers::crm::update_customer,
        handlers::crm::delete_customer,

        // --- Lookups ---
        handlers::lookups::list_states,
        handlers::lookups::list_districts,

        // --- Hotel ---
        handlers::hotel::create_room_type,
        handlers::hotel::list_room_types,
        handlers::hotel::create_room,
        handlers::hotel::list_rooms,
        handlers::hotel::update_room_status,
        handlers::hotel::create_booking,
        handlers::hotel::list_bookings,
        handlers::hotel::update_booking_status,

        // --- Purchasing ---
        handlers::purchasing::create_supplier,
        handlers::purchasing::list_suppliers,

        // --- Tenancy ---
        handlers::tenancy::get_current_tenant,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterPayload,
            models::auth::LoginPayload,
            models::auth::CreateUserPayload,
            models::auth::AuthResponse,

            // --- Access Control ---
            models::access::Role,
            models::access::PermissionState,
            models::access::OverrideResponse,
            models::access::UpdateOverridesPayload,
            models::access::SetOverridePayload,
            models::access::EffectivePermissions,

            // --- CRM ---
            models::crm::Customer,
            models::crm::Address,
            models::crm::CustomerDetail,
            models::crm::AddressInput,
            models::crm::CreateCustomerPayload,
            models::crm::UpdateCustomerPayload,
            models::crm::State,
            models::crm::District,

            // --- Hotel ---
            models::hotel::RoomType,
            models::hotel::RoomStatus,
            models::hotel::Room,
            models::hotel::BookingStatus,
            models::hotel::Booking,
            models::hotel::CreateRoomTypePayload,
            models::hotel::CreateRoomPayload,
            models::hotel::UpdateRoomStatusPayload,
            models::hotel::CreateBookingPayload,
            models::hotel::UpdateBookingStatusPayload,

            // --- Purchasing ---
            models::purchasing::Supplier,
            models::purchasing::CreateSupplierPayload,

            // --- Tenancy ---
            models::tenancy::Tenant,
        )
    ),
    tags(
        (name = "Auth", description = "Authentication and registration"),
        (name = "Users", description = "Staff management"),
        (name = "Access Control", description = "Role defaults and per-user permission overrides"),
        (name = "CRM", description = "Customer records and addresses"),
        (name = "Lookups", description = "State and district reference data"),
        (name = "Hotel", description = "Room types and rooms"),
        (name = "Bookings", description = "Reservations"),
        (name = "Purchasing", description = "Supplier directory"),
        (name = "Tenancy", description = "Property context")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
