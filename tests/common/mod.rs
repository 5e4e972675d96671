#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use serde_json::Value;
use starwars_blog_api::{
    db::{create_orm_conn, run_migrations},
    entity::{characters, planets, users},
    routes::create_app,
    state::AppState,
};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub type App = NormalizePath<Router>;

/// Fresh in-memory database per test. A single connection keeps every query
/// on the same SQLite memory instance.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub fn app(state: &AppState) -> App {
    create_app(state.clone())
}

pub async fn get(app: &App, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(app, request).await
}

pub async fn post_json(app: &App, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(app, request).await
}

/// POST with no Content-Type header at all.
pub async fn post_raw(app: &App, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body.to_string()))
        .expect("request");
    send(app, request).await
}

async fn send(app: &App, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn create_user(state: &AppState, email: &str) -> anyhow::Result<users::Model> {
    let user = users::ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        password: Set("hunter2".into()),
        is_active: Set(true),
    }
    .insert(&state.orm)
    .await?;
    Ok(user)
}

pub async fn create_character(state: &AppState, name: &str) -> anyhow::Result<characters::Model> {
    let character = characters::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        gender: Set("male".into()),
        eye_color: Set("blue".into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(character)
}

pub async fn create_planet(state: &AppState, name: &str) -> anyhow::Result<planets::Model> {
    let planet = planets::ActiveModel {
        id: NotSet,
        planet_name: Set(name.to_string()),
        diameter: Set(Some("10465".into())),
        gravity: Set(None),
    }
    .insert(&state.orm)
    .await?;
    Ok(planet)
}

pub fn sorted_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("json object")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}
