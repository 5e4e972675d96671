use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    error::AppResult,
    models::{Character, Favorite},
    response::Msg,
    services::character_service,
    state::AppState,
};

pub const COLLECTION: &str = "/character";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(COLLECTION, get(list_characters))
        .route(&format!("{COLLECTION}/{{id}}"), get(get_character))
        .route(
            &format!("{COLLECTION}/{{id}}/favorites"),
            get(list_character_favorites),
        )
}

#[utoipa::path(
    get,
    path = "/character",
    responses(
        (status = 200, description = "All characters", body = Vec<Character>),
        (status = 404, description = "No characters stored", body = Msg)
    ),
    tag = "Characters"
)]
pub async fn list_characters(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = character_service::list_characters(&state).await?;
    Ok(Json(characters))
}

#[utoipa::path(
    get,
    path = "/character/{id}",
    params(
        ("id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Get character", body = Character),
        (status = 404, description = "Character not found", body = Msg)
    ),
    tag = "Characters"
)]
pub async fn get_character(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Character>> {
    let Path(id) = id?;
    let character = character_service::get_character(&state, id).await?;
    Ok(Json(character))
}

#[utoipa::path(
    get,
    path = "/character/{id}/favorites",
    params(
        ("id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorites pointing at the character", body = Vec<Favorite>),
        (status = 404, description = "Character not found", body = Msg)
    ),
    tag = "Characters"
)]
pub async fn list_character_favorites(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Vec<Favorite>>> {
    let Path(id) = id?;
    let favorites = character_service::list_character_favorites(&state, id).await?;
    Ok(Json(favorites))
}
