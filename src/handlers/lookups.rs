// src/handlers/lookups.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{common::error::AppError, config::AppState};

#[utoipa::path(
    get,
    path = "/api/lookups/states",
    tag = "Lookups",
    responses(
        (status = 200, description = "All states", body = Vec<crate::models::crm::State>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_states(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let states = app_state.lookup_repo.list_states().await?;
    Ok(Json(states))
}

#[utoipa::path(
    get,
    path = "/api/lookups/states/{id}/districts",
    tag = "Lookups",
    responses(
        (status = 200, description = "Districts of a state",
         body = Vec<crate::models::crm::District>),
        (status = 404, description = "State not found")
    ),
    params(
        ("id" = Uuid, Path, description = "State id")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_districts(
    State(app_state): State<AppState>,
    Path(state_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.lookup_repo.state_exists(state_id).await? {
        return Err(AppError::NotFound("State"));
    }

    let districts = app_state.lookup_repo.list_districts(state_id).await?;
    Ok(Json(districts))
}
