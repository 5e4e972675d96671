use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::response::{ErrorBody, Msg};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// Application exception: status and message are returned to the client as-is.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("ORM error")]
    OrmError(#[from] DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::Api {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Api { status, .. } => *status,
            AppError::OrmError(err) if is_foreign_key_violation(err) => StatusCode::BAD_REQUEST,
            AppError::OrmError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::NotFound(msg) => (status, Json(Msg { msg })).into_response(),
            AppError::Api { message, .. } => (status, Json(ErrorBody { message })).into_response(),
            AppError::OrmError(err) if status == StatusCode::BAD_REQUEST => {
                tracing::warn!(error = %err, "foreign key violation");
                let message = "referenced row does not exist".to_string();
                (status, Json(ErrorBody { message })).into_response()
            }
            AppError::OrmError(err) => {
                tracing::error!(error = %err, "database error");
                let message = "database error".to_string();
                (status, Json(ErrorBody { message })).into_response()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                let message = "internal server error".to_string();
                (status, Json(ErrorBody { message })).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::not_found("user with id 7 not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "user with id 7 not found");
    }

    #[test]
    fn application_exception_keeps_its_status() {
        let err = AppError::Api {
            status: StatusCode::CONFLICT,
            message: "already there".into(),
        };
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "already there");
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn generic_db_error_is_a_server_error() {
        let err = AppError::from(DbErr::Custom("boom".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
