mod common;

use axum::extract::State;
use starwars_blog_api::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let response = health_check(State(state)).await?;
    assert_eq!(response.0.status, "ok");

    Ok(())
}
