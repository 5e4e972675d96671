use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::favorites::CreateFavoriteRequest,
    models::{Character, Favorite, Planet, User},
    response::{ErrorBody, Msg},
    routes::{characters, favorites, health, planets, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::list_user_favorites,
        characters::list_characters,
        characters::get_character,
        characters::list_character_favorites,
        planets::list_planets,
        planets::get_planet,
        planets::list_planet_favorites,
        favorites::list_favorites,
        favorites::get_favorite,
        favorites::create_favorite
    ),
    components(
        schemas(
            User,
            Character,
            Planet,
            Favorite,
            CreateFavoriteRequest,
            health::HealthData,
            Msg,
            ErrorBody
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Characters", description = "Character endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
