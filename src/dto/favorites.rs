use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /favorites`. Missing keys and `null` both deserialize to `None`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateFavoriteRequest {
    pub user: Option<i32>,
    pub character: Option<i32>,
    pub planets: Option<i32>,
}
