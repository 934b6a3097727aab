//! Person resource routes
//!
//! Mounted at `/v1/person`:
//! - `GET    /v1/person`      list all persons
//! - `POST   /v1/person`      create (201, or 409 on a taken email)
//! - `PUT    /v1/person`      update by the id in the payload
//! - `GET    /v1/person/:id`  fetch one
//! - `DELETE /v1/person/:id`  remove one (204)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rolodex_core::Person;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the person resource router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/person", get(find_all).post(create).put(update))
        .route("/v1/person/:id", get(find_by_id).delete(delete_person))
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(state.service.find_all()?))
}

async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.service.find_by_id(id)?))
}

async fn create(
    State(state): State<AppState>,
    Json(person): Json<Person>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let created = state.service.create(person)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    Json(person): Json<Person>,
) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.service.update(&person)?))
}

async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
