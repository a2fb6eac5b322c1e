use crate::domain::errors::RepositoryError;

use super::storage::CartStorageError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.storage")]
    Storage(#[from] CartStorageError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.no_eligible_items")]
    NoEligibleItems,
    #[error("checkout.invalid_base_url")]
    InvalidBaseUrl,
}
