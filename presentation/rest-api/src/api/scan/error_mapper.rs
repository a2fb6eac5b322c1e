use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::qr_payload::errors::{QrPayloadError, ResolvePayloadError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ResolvePayloadError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ResolvePayloadError::InvalidPayload(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MalformedPayload",
                payload_message(err),
            ),
            ResolvePayloadError::NotFound
            | ResolvePayloadError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "NotFound", "item.not_found")
            }
            ResolvePayloadError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

fn payload_message(err: &QrPayloadError) -> &'static str {
    match err {
        QrPayloadError::Malformed => "qr_payload.malformed",
        QrPayloadError::MissingField("id") => "qr_payload.missing_id",
        QrPayloadError::MissingField("name") => "qr_payload.missing_name",
        QrPayloadError::MissingField("price") => "qr_payload.missing_price",
        QrPayloadError::MissingField(_) => "qr_payload.missing_field",
        QrPayloadError::InvalidPrice => "qr_payload.invalid_price",
        QrPayloadError::InvalidQuantity => "qr_payload.invalid_quantity",
        QrPayloadError::InvalidOrigin => "qr_payload.invalid_origin",
        QrPayloadError::Encoding => "qr_payload.encoding_failed",
    }
}
