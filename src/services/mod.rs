pub mod character_service;
pub mod favorite_service;
pub mod planet_service;
pub mod user_service;

use crate::error::{AppError, AppResult};

/// List-all endpoints answer 404 instead of an empty array.
pub(crate) fn non_empty<T>(items: Vec<T>) -> AppResult<Vec<T>> {
    if items.is_empty() {
        return Err(AppError::not_found("not found"));
    }
    Ok(items)
}

/// Path ids are accepted as i64; anything outside the i32 key range cannot
/// name a stored row and is reported the same way as a missing one.
pub(crate) fn row_key(id: i64, kind: &str) -> AppResult<i32> {
    i32::try_from(id).map_err(|_| AppError::not_found(format!("{kind} with id {id} not found")))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn row_key_passes_through_i32_ids() {
        assert_eq!(row_key(42, "user").unwrap(), 42);
    }

    #[test]
    fn row_key_out_of_range_is_not_found() {
        let err = row_key(4_294_967_296, "user").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "user with id 4294967296 not found");
    }
}
