use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    dto::favorites::CreateFavoriteRequest,
    error::{AppError, AppResult},
    models::Favorite,
    response::{ErrorBody, Msg},
    services::favorite_service,
    state::AppState,
};

pub const COLLECTION: &str = "/favorites";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(COLLECTION, get(list_favorites).post(create_favorite))
        .route(&format!("{COLLECTION}/{{id}}"), get(get_favorite))
}

#[utoipa::path(
    get,
    path = "/favorites",
    responses(
        (status = 200, description = "All favorites", body = Vec<Favorite>),
        (status = 404, description = "No favorites stored", body = Msg)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(State(state): State<AppState>) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = favorite_service::list_favorites(&state).await?;
    Ok(Json(favorites))
}

#[utoipa::path(
    get,
    path = "/favorites/{id}",
    params(
        ("id" = i64, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Get favorite", body = Favorite),
        (status = 404, description = "Favorite not found", body = Msg)
    ),
    tag = "Favorites"
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Favorite>> {
    let Path(id) = id?;
    let favorite = favorite_service::get_favorite(&state, id).await?;
    Ok(Json(favorite))
}

#[utoipa::path(
    post,
    path = "/favorites",
    request_body = CreateFavoriteRequest,
    responses(
        (status = 200, description = "Favorite created", body = Msg),
        (status = 400, description = "Missing field or unknown referenced id", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<Msg>> {
    // The body is JSON whatever the Content-Type header says.
    let payload: CreateFavoriteRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request(format!("invalid JSON body: {e}")))?;
    let resp = favorite_service::create_favorite(&state, payload).await?;
    Ok(Json(resp))
}
