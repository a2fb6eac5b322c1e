use crate::domain::errors::RepositoryError;

/// A scanned or stored payload that cannot be turned back into item fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QrPayloadError {
    #[error("qr_payload.malformed")]
    Malformed,
    #[error("qr_payload.missing_field")]
    MissingField(&'static str),
    #[error("qr_payload.invalid_price")]
    InvalidPrice,
    #[error("qr_payload.invalid_quantity")]
    InvalidQuantity,
    #[error("qr_payload.invalid_origin")]
    InvalidOrigin,
    #[error("qr_payload.encoding_failed")]
    Encoding,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolvePayloadError {
    #[error(transparent)]
    InvalidPayload(#[from] QrPayloadError),
    #[error("item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
