use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    error::AppResult,
    models::{Favorite, Planet},
    response::Msg,
    services::planet_service,
    state::AppState,
};

pub const COLLECTION: &str = "/planets";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(COLLECTION, get(list_planets))
        .route(&format!("{COLLECTION}/{{id}}"), get(get_planet))
        .route(
            &format!("{COLLECTION}/{{id}}/favorites"),
            get(list_planet_favorites),
        )
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets", body = Vec<Planet>),
        (status = 404, description = "No planets stored", body = Msg)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = planet_service::list_planets(&state).await?;
    Ok(Json(planets))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found", body = Msg)
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Planet>> {
    let Path(id) = id?;
    let planet = planet_service::get_planet(&state, id).await?;
    Ok(Json(planet))
}

#[utoipa::path(
    get,
    path = "/planets/{id}/favorites",
    params(
        ("id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorites pointing at the planet", body = Vec<Favorite>),
        (status = 404, description = "Planet not found", body = Msg)
    ),
    tag = "Planets"
)]
pub async fn list_planet_favorites(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Vec<Favorite>>> {
    let Path(id) = id?;
    let favorites = planet_service::list_planet_favorites(&state, id).await?;
    Ok(Json(favorites))
}
