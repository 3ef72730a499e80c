// src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, patch, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::{auth_guard, tenant_guard};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    // If configuration fails the application must not start.
    let app_state = AppState::new()
        .await
        .expect("failed to initialize application state");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("failed to run database migrations");

    tracing::info!("database migrations applied");

    // Public auth routes
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Routes that only need a valid token
    let session_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // The effective set is tenant-scoped, so it sits behind the tenant guard.
    let permission_routes = Router::new()
        .route("/permissions", get(handlers::auth::get_my_permissions))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            tenant_guard,
        ));

    let user_routes = Router::new()
        .route(
            "/",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            tenant_guard,
        ));

    let access_routes = Router::new()
        .route(
            "/users/{id}/overrides",
            get(handlers::access::get_user_overrides).put(handlers::access::put_user_overrides),
        )
        .route(
            "/users/{id}/overrides/{key}",
            patch(handlers::access::patch_user_override),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            tenant_guard,
        ));

    let crm_routes = Router::new()
        .route(
            "/customers",
            post(handlers::crm::create_customer).get(handlers::crm::list_customers),
        )
        .route(
            "/customers/{id}",
            get(handlers::crm::get_customer)
                .put(handlers::crm::update_customer)
                .delete(handlers::crm::delete_customer),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            tenant_guard,
        ));

    let lookup_routes = Router::new()
        .route("/states", get(handlers::lookups::list_states))
        .route(
            "/states/{id}/districts",
            get(handlers::lookups::list_districts),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let hotel_routes = Router::new()
        .route(
            "/room-types",
            post(handlers::hotel::create_room_type).get(handlers::hotel::list_room_types),
        )
        .route(
            "/rooms",
            post(handlers::hotel::create_room).get(handlers::hotel::list_rooms),
        )
        .route(
            "/rooms/{id}/status",
            patch(handlers::hotel::update_room_status),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            tenant_guard,
        ));

    let booking_routes = Router::new()
        .route(
            "/",
            post(handlers::hotel::create_booking).get(handlers::hotel::list_bookings),
        )
        .route(
            "/{id}/status",
            patch(handlers::hotel::update_booking_status),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            tenant_guard,
        ));

    let purchasing_routes = Router::new()
        .route(
            "/suppliers",
            post(handlers::purchasing::create_supplier).get(handlers::purchasing::list_suppliers),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            tenant_guard,
        ));

    let tenancy_routes = Router::new()
        .route("/current", get(handlers::tenancy::get_current_tenant))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            tenant_guard,
        ));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/auth", session_routes)
        .nest("/api/auth", permission_routes)
        .nest("/api/users", user_routes)
        .nest("/api/settings/access", access_routes)
        .nest("/api/crm", crm_routes)
        .nest("/api/lookups", lookup_routes)
        .nest("/api/hotel", hotel_routes)
        .nest("/api/bookings", booking_routes)
        .nest("/api/purchasing", purchasing_routes)
        .nest("/api/tenants", tenancy_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("failed to bind TCP listener");
    tracing::info!("server listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("axum server error");
}
