//! Handlers for the `/movies` resource.
//!
//! Write endpoints take the body as untyped JSON and run it through the
//! schema validator so every field problem is reported in one response.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::Movie;
use movies_core::schema::{
    validate_movie, validate_partial_movie, IssueCode, ValidationIssues,
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::query::ListMoviesParams;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Movie";

/// Ids that are not UUIDs cannot match any record, so they resolve to 404
/// rather than a parse error.
fn parse_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::not_found(ENTITY, id))
}

/// Unwrap a JSON body, turning an extractor rejection into a validation
/// failure so every failed write answers with an issue list.
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    tracing::debug!(error = %rejection.body_text(), "Request body rejected");

    let issues = match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ValidationIssues::root(IssueCode::InvalidType, "Movie must be a JSON object")
        }
        other => ValidationIssues::root(IssueCode::InvalidType, other.body_text()),
    };
    Err(CoreError::Validation(issues).into())
}

/// GET /movies
///
/// List every movie, or only those tagged with `?genre=` (case-insensitive).
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let store = state.store.read().await;

    let movies = match params.genre() {
        Some(genre) => store.filter_by_genre(genre).into_iter().cloned().collect(),
        None => store.all().to_vec(),
    };

    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie_id = parse_id(&id)?;

    let movie = state.store.read().await.find(movie_id).cloned();

    movie.map(Json).ok_or_else(|| AppError::not_found(ENTITY, id))
}

/// POST /movies
///
/// Validate the full payload, assign a new id and append the record.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = json_body(payload)?;
    let new_movie = validate_movie(&body).map_err(CoreError::Validation)?;

    let movie = state.store.write().await.insert(new_movie).clone();

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let movie_id = parse_id(&id)?;

    let removed = state.store.write().await.remove(movie_id);
    let Some(movie) = removed else {
        return Err(AppError::not_found(ENTITY, id));
    };

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie deleted");

    Ok(Json(MessageResponse::new("Movie deleted")))
}

/// PATCH /movies/{id}
///
/// Validate the partial payload first (400 wins over 404), then merge the
/// present fields onto the stored record.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let body = json_body(payload)?;
    let patch = validate_partial_movie(&body).map_err(CoreError::Validation)?;
    let movie_id = parse_id(&id)?;
    let empty = patch.is_empty();

    let updated = state.store.write().await.update(movie_id, patch).cloned();
    let Some(movie) = updated else {
        return Err(AppError::not_found(ENTITY, id));
    };

    if empty {
        tracing::debug!(movie_id = %movie.id, "Empty update payload, record unchanged");
    } else {
        tracing::info!(movie_id = %movie.id, "Movie updated");
    }

    Ok(Json(movie))
}
