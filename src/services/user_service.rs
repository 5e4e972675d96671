use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

use crate::{
    entity::{Favorites, Users, favorites, users},
    error::{AppError, AppResult},
    models::{Favorite, User},
    services::{non_empty, row_key},
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(users::Column::Id)
        .all(&state.orm)
        .await?;
    tracing::debug!(count = users.len(), "listed users");
    non_empty(users.into_iter().map(User::from).collect())
}

pub async fn get_user(state: &AppState, id: i64) -> AppResult<User> {
    find_user(state, id).await.map(User::from)
}

pub async fn list_user_favorites(state: &AppState, id: i64) -> AppResult<Vec<Favorite>> {
    let user = find_user(state, id).await?;
    let favorites = user
        .find_related(Favorites)
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?;
    Ok(favorites.into_iter().map(Favorite::from).collect())
}

async fn find_user(state: &AppState, id: i64) -> AppResult<users::Model> {
    let key = row_key(id, "user")?;
    Users::find_by_id(key)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found(format!("user with id {id} not found")))
}
