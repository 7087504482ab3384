use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{HealthStatus, Movie, NewMovie},
};

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "UP", message: "MovieWorld API is running" })
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.store.find_all().await?))
}

pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<Movie>> {
    let movie = state.store.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(movie))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewMovie>,
) -> AppResult<impl IntoResponse> {
    let saved = state.store.insert(body).await?;
    let location = format!("/api/movies/{}", saved.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(saved)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<NewMovie>,
) -> AppResult<Json<Movie>> {
    let updated = state.store.update(id, body).await?.ok_or(AppError::NotFound)?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if !state.store.exists_by_id(id).await? {
        return Err(AppError::NotFound);
    }
    state.store.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
