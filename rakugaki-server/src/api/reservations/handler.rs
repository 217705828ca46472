//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::{Reservation, ReservationCreated, ReservationSubmission};

use crate::core::{AppError, AppResult, ServerState};

/// POST /api/reservations - 提交预订
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ReservationSubmission>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ReservationCreated>)> {
    let Json(submission) = payload?;
    let reservation = state.reservations.submit(submission).await?;
    Ok((StatusCode::CREATED, Json(ReservationCreated::new(reservation))))
}

/// GET /api/reservations - 获取所有预订 (按创建顺序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.reservations.list().await?;
    Ok(Json(reservations))
}

/// GET /api/reservations/:id - 获取单个预订
///
/// 非数字 ID 与不存在的 ID 一样返回 404
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let id: u64 = id
        .trim()
        .parse()
        .map_err(|_| AppError::not_found("Reservation not found"))?;
    let reservation = state.reservations.get(id).await?;
    Ok(Json(reservation))
}
