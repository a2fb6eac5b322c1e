use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::{CartError, CheckoutError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_quantity",
            ),
            CartError::ItemNotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found"),
            CartError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "cart.storage",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CheckoutError::NoEligibleItems => (
                StatusCode::CONFLICT,
                "Conflict",
                "checkout.no_eligible_items",
            ),
            CheckoutError::InvalidBaseUrl => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "checkout.invalid_base_url",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::storage::CartStorageError;

    #[test]
    fn should_report_empty_checkout_as_conflict() {
        let (status, json) = CheckoutError::NoEligibleItems.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "checkout.no_eligible_items");
    }

    #[test]
    fn should_report_storage_failure_as_internal() {
        let (status, _) = CartError::Storage(CartStorageError::Unavailable).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
