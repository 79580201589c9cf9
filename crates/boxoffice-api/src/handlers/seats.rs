//! Seat listing and hold/confirm/release handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use boxoffice_core::AppError;
use boxoffice_core::types::SeatId;
use boxoffice_registry::SeatView;

use crate::dto::request::{ConfirmRequest, HoldRequest, ReleaseRequest};
use crate::dto::response::{ConfirmResponse, HoldResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/seats
pub async fn list_seats(State(state): State<AppState>) -> Json<Vec<SeatView>> {
    Json(state.registry.list().await)
}

/// GET /api/seats/{id}
pub async fn get_seat(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<SeatView>, ApiError> {
    let view = state.registry.get(SeatId(id)).await?;
    Ok(Json(view))
}

/// POST /api/seats/{id}/hold
pub async fn hold_seat(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<HoldRequest>,
) -> Result<(StatusCode, Json<HoldResponse>), ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let grant = state.registry.hold(SeatId(id), &payload.actor_id).await?;
    Ok((StatusCode::CREATED, Json(grant.into())))
}

/// POST /api/seats/{id}/confirm
pub async fn confirm_seat(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<ConfirmRequest>,
) -> Result<Json<ConfirmResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let confirmed = state
        .registry
        .confirm(SeatId(id), &payload.actor_id, &payload.token)
        .await?;
    Ok(Json(confirmed.into()))
}

/// POST /api/seats/{id}/release
pub async fn release_seat(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<ReleaseRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.registry.release(SeatId(id), &payload.actor_id).await?;
    Ok(Json(MessageResponse {
        message: "Seat released".to_string(),
    }))
}
