use parking_lot::Mutex;

use business::domain::cart::model::CartLineItem;
use business::domain::cart::storage::{CartStorage, CartStorageError, decode_lines, encode_lines};

/// Holds the encoded slot in memory, so it round-trips exactly like the file slot.
#[derive(Default)]
pub struct InMemoryCartStorage {
    slot: Mutex<Option<String>>,
}

impl InMemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

impl CartStorage for InMemoryCartStorage {
    fn load(&self) -> Result<Vec<CartLineItem>, CartStorageError> {
        match self.slot.lock().as_deref() {
            Some(raw) => decode_lines(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, lines: &[CartLineItem]) -> Result<(), CartStorageError> {
        let raw = encode_lines(lines)?;
        *self.slot.lock() = Some(raw);
        Ok(())
    }
}
