use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    error::AppResult,
    models::{Favorite, User},
    response::Msg,
    services::user_service,
    state::AppState,
};

pub const COLLECTION: &str = "/user";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(COLLECTION, get(list_users))
        .route(&format!("{COLLECTION}/{{id}}"), get(get_user))
        .route(
            &format!("{COLLECTION}/{{id}}/favorites"),
            get(list_user_favorites),
        )
}

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 404, description = "No users stored", body = Msg)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user_service::list_users(&state).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = User),
        (status = 404, description = "User not found", body = Msg)
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<User>> {
    let Path(id) = id?;
    let user = user_service::get_user(&state, id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/user/{id}/favorites",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites owned by the user", body = Vec<Favorite>),
        (status = 404, description = "User not found", body = Msg)
    ),
    tag = "Users"
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Vec<Favorite>>> {
    let Path(id) = id?;
    let favorites = user_service::list_user_favorites(&state, id).await?;
    Ok(Json(favorites))
}
