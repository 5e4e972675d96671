use serde::Serialize;
use utoipa::ToSchema;

/// `{"msg": ...}` body used for not-found and success notices.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Msg {
    pub msg: String,
}

impl Msg {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Body of an application exception.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct ErrorBody {
    pub message: String,
}
