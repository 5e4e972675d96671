use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

use crate::{
    entity::{Characters, Favorites, characters, favorites},
    error::{AppError, AppResult},
    models::{Character, Favorite},
    services::{non_empty, row_key},
    state::AppState,
};

pub async fn list_characters(state: &AppState) -> AppResult<Vec<Character>> {
    let characters = Characters::find()
        .order_by_asc(characters::Column::Id)
        .all(&state.orm)
        .await?;
    tracing::debug!(count = characters.len(), "listed characters");
    non_empty(characters.into_iter().map(Character::from).collect())
}

pub async fn get_character(state: &AppState, id: i64) -> AppResult<Character> {
    find_character(state, id).await.map(Character::from)
}

pub async fn list_character_favorites(state: &AppState, id: i64) -> AppResult<Vec<Favorite>> {
    let character = find_character(state, id).await?;
    let favorites = character
        .find_related(Favorites)
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?;
    Ok(favorites.into_iter().map(Favorite::from).collect())
}

async fn find_character(state: &AppState, id: i64) -> AppResult<characters::Model> {
    let key = row_key(id, "character")?;
    Characters::find_by_id(key)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found(format!("character with id {id} not found")))
}
