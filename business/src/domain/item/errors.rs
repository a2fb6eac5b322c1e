use crate::domain::qr_payload::errors::QrPayloadError;
use crate::domain::shared::value_objects::PriceError;

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_empty")]
    NameEmpty,
    #[error("item.invalid_price")]
    InvalidPrice(#[from] PriceError),
    #[error("item.invalid_page_size")]
    InvalidPageSize,
    #[error("item.label_encoding")]
    Label(#[from] QrPayloadError),
    #[error("item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
