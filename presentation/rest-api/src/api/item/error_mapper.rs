use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.name_empty",
            ),
            ItemError::InvalidPrice(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.invalid_price",
            ),
            ItemError::InvalidPageSize => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.invalid_page_size",
            ),
            ItemError::Repository(RepositoryError::InvalidCursor) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "repository.invalid_cursor",
            ),
            ItemError::NotFound | ItemError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "NotFound", "item.not_found")
            }
            ItemError::Label(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "item.label_encoding",
            ),
            ItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::PriceError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = ItemError::InvalidPrice(PriceError::Negative).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "item.invalid_price");
    }

    #[test]
    fn should_map_stale_cursor_to_bad_request() {
        let (status, _) =
            ItemError::Repository(RepositoryError::InvalidCursor).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_keep_not_found_distinct_from_transport_errors() {
        let (not_found, json) = ItemError::NotFound.into_error_response();
        let (transport, _) =
            ItemError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(not_found, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "item.not_found");
        assert_eq!(transport, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
