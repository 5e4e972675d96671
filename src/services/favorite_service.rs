use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{
    dto::favorites::CreateFavoriteRequest,
    entity::{
        Favorites,
        favorites::{self, ActiveModel},
    },
    error::{AppError, AppResult},
    models::Favorite,
    response::Msg,
    services::{non_empty, row_key},
    state::AppState,
};

pub async fn list_favorites(state: &AppState) -> AppResult<Vec<Favorite>> {
    let favorites = Favorites::find()
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?;
    tracing::debug!(count = favorites.len(), "listed favorites");
    non_empty(favorites.into_iter().map(Favorite::from).collect())
}

pub async fn get_favorite(state: &AppState, id: i64) -> AppResult<Favorite> {
    let key = row_key(id, "favorites")?;
    Favorites::find_by_id(key)
        .one(&state.orm)
        .await?
        .map(Favorite::from)
        .ok_or_else(|| AppError::not_found(format!("favorites with id {id} not found")))
}

/// Inserts a favorite as given. Referenced ids are not looked up first and
/// duplicates are not checked; a dangling id is rejected by the foreign key.
pub async fn create_favorite(state: &AppState, payload: CreateFavoriteRequest) -> AppResult<Msg> {
    let CreateFavoriteRequest {
        user,
        character,
        planets,
    } = payload;

    if user.is_none() {
        return Err(AppError::bad_request("field 'user' is required"));
    }
    if character.is_none() && planets.is_none() {
        return Err(AppError::bad_request(
            "one of 'character' or 'planets' is required",
        ));
    }

    let active = ActiveModel {
        id: NotSet,
        user_id: Set(user),
        character_id: Set(character),
        planets_id: Set(planets),
    };
    let favorite = active.insert(&state.orm).await?;

    tracing::info!(
        favorite_id = favorite.id,
        user_id = ?favorite.user_id,
        character_id = ?favorite.character_id,
        planets_id = ?favorite.planets_id,
        "favorite created"
    );

    Ok(Msg::new("favorites created successfully"))
}
