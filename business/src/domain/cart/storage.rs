use std::collections::HashSet;

use serde_json::Value;

use super::model::CartLineItem;

/// Name of the single durable slot holding the cart.
pub const CART_SLOT: &str = "cart_items";

#[derive(Debug, thiserror::Error)]
pub enum CartStorageError {
    #[error("cart_storage.corrupt")]
    Corrupt,
    #[error("cart_storage.unavailable")]
    Unavailable,
}

/// Durable home for the cart's line items.
///
/// `save` replaces whatever was stored before. `load` on an empty slot
/// returns an empty list.
pub trait CartStorage: Send + Sync {
    fn load(&self) -> Result<Vec<CartLineItem>, CartStorageError>;
    fn save(&self, lines: &[CartLineItem]) -> Result<(), CartStorageError>;
}

pub fn encode_lines(lines: &[CartLineItem]) -> Result<String, CartStorageError> {
    serde_json::to_string(lines).map_err(|_| CartStorageError::Corrupt)
}

/// Parses a stored slot. Blobs that break cart invariants (zero quantities,
/// repeated ids) count as corrupt.
pub fn decode_lines(raw: &str) -> Result<Vec<CartLineItem>, CartStorageError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let values: Vec<Value> = serde_json::from_str(raw).map_err(|_| CartStorageError::Corrupt)?;
    if !values.iter().all(Value::is_object) {
        return Err(CartStorageError::Corrupt);
    }
    let lines: Vec<CartLineItem> = values
        .into_iter()
        .map(serde_json::from_value::<CartLineItem>)
        .collect::<Result<_, _>>()
        .map_err(|_| CartStorageError::Corrupt)?;

    let mut seen = HashSet::new();
    for line in &lines {
        if line.quantity == 0 || !seen.insert(&line.id) {
            return Err(CartStorageError::Corrupt);
        }
    }

    Ok(lines)
}
