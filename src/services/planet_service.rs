use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

use crate::{
    entity::{Favorites, Planets, favorites, planets},
    error::{AppError, AppResult},
    models::{Favorite, Planet},
    services::{non_empty, row_key},
    state::AppState,
};

pub async fn list_planets(state: &AppState) -> AppResult<Vec<Planet>> {
    let planets = Planets::find()
        .order_by_asc(planets::Column::Id)
        .all(&state.orm)
        .await?;
    tracing::debug!(count = planets.len(), "listed planets");
    non_empty(planets.into_iter().map(Planet::from).collect())
}

pub async fn get_planet(state: &AppState, id: i64) -> AppResult<Planet> {
    find_planet(state, id).await.map(Planet::from)
}

pub async fn list_planet_favorites(state: &AppState, id: i64) -> AppResult<Vec<Favorite>> {
    let planet = find_planet(state, id).await?;
    let favorites = planet
        .find_related(Favorites)
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?;
    Ok(favorites.into_iter().map(Favorite::from).collect())
}

async fn find_planet(state: &AppState, id: i64) -> AppResult<planets::Model> {
    let key = row_key(id, "planets")?;
    Planets::find_by_id(key)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found(format!("planets with id {id} not found")))
}
