use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
};

use crate::{response::Msg, state::AppState};

pub mod characters;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod planets;
pub mod sitemap;
pub mod users;

type ResourceRouter = fn() -> Router<AppState>;

/// Every resource collection and the router serving it. The sitemap reads
/// the same table, so a resource cannot be routed without being listed.
const RESOURCES: &[(&str, ResourceRouter)] = &[
    (users::COLLECTION, users::router),
    (characters::COLLECTION, characters::router),
    (planets::COLLECTION, planets::router),
    (favorites::COLLECTION, favorites::router),
];

pub fn collection_paths() -> impl Iterator<Item = &'static str> {
    RESOURCES.iter().map(|(path, _)| *path)
}

// Resource routes live at the top level, without an /api prefix.
pub fn create_api_router() -> Router<AppState> {
    RESOURCES
        .iter()
        .fold(Router::new(), |router, (_, build)| router.merge(build()))
}

/// Application router with state bound. Transport layers (tracing, request
/// ids, limits) are added by the binary before [`normalize_paths`].
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Strips a trailing slash before routing, so `/user/` serves `/user`.
/// It has to wrap the router: a `Router::layer` runs after the route match.
pub fn normalize_paths(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

pub fn create_app(state: AppState) -> NormalizePath<Router> {
    normalize_paths(create_router(state))
}

async fn not_found(uri: Uri) -> (StatusCode, Json<Msg>) {
    let body = Msg::new(format!("path {} not found", uri.path()));
    (StatusCode::NOT_FOUND, Json(body))
}
