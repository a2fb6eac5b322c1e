use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use super::errors::CartError;
use super::model::{CartLineItem, CartSnapshot, total_of};
use super::storage::CartStorage;
use crate::domain::item::model::ItemRecord;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{ItemId, Price};

pub type CartListener = Arc<dyn Fn(&CartSnapshot) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Session cart shared by reference between everything that reads or edits it.
///
/// Every mutation persists the full list before it becomes visible. If the
/// write fails the visible lines stay as they were.
pub struct CartStore {
    lines: Mutex<Vec<CartLineItem>>,
    listeners: Mutex<Vec<(SubscriptionId, CartListener)>>,
    next_subscription: AtomicU64,
    storage: Arc<dyn CartStorage>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Builds the store from whatever the storage slot holds. An unreadable
    /// slot starts an empty cart.
    pub fn restore(storage: Arc<dyn CartStorage>, logger: Arc<dyn Logger>) -> Self {
        let lines = match storage.load() {
            Ok(lines) => {
                logger.debug(&format!("Restored cart with {} line items", lines.len()));
                lines
            }
            Err(err) => {
                logger.warn(&format!("Discarding stored cart: {}", err));
                Vec::new()
            }
        };

        Self {
            lines: Mutex::new(lines),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            storage,
            logger,
        }
    }

    pub fn items(&self) -> Vec<CartLineItem> {
        self.lines.lock().clone()
    }

    pub fn total(&self) -> Price {
        total_of(&self.lines.lock())
    }

    pub fn item_count(&self) -> u32 {
        self.snapshot().item_count
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from_lines(&self.lines.lock())
    }

    /// Adds `quantity` of the record. A line that already holds the same id
    /// grows instead of being duplicated.
    pub fn add_item(&self, item: &ItemRecord, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let mut overflow = false;
        self.commit(|lines| {
            let mut next = lines.to_vec();
            match next.iter_mut().find(|line| line.id == item.id) {
                Some(line) => match line.quantity.checked_add(quantity) {
                    Some(total) => line.quantity = total,
                    None => {
                        overflow = true;
                        return None;
                    }
                },
                None => next.push(CartLineItem::from_record(item, quantity)),
            }
            Some(next)
        })?;

        if overflow {
            return Err(CartError::InvalidQuantity);
        }
        self.logger
            .debug(&format!("Added {} x {} to cart", quantity, item.id));
        Ok(())
    }

    pub fn remove_item(&self, id: &ItemId) -> Result<(), CartError> {
        self.commit(|lines| {
            if !lines.iter().any(|line| &line.id == id) {
                return None;
            }
            Some(
                lines
                    .iter()
                    .filter(|line| &line.id != id)
                    .cloned()
                    .collect(),
            )
        })
    }

    /// Sets a line's quantity. Anything below 1 is ignored, as is an unknown id.
    pub fn update_quantity(&self, id: &ItemId, quantity: i64) -> Result<(), CartError> {
        if quantity < 1 {
            self.logger.debug(&format!(
                "Ignoring quantity {} for cart line {}",
                quantity, id
            ));
            return Ok(());
        }
        let quantity = u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity)?;

        self.commit(|lines| {
            let mut next = lines.to_vec();
            let line = next.iter_mut().find(|line| &line.id == id)?;
            line.quantity = quantity;
            Some(next)
        })
    }

    pub fn clear_cart(&self) -> Result<(), CartError> {
        self.commit(|_| Some(Vec::new()))
    }

    pub fn subscribe(&self, listener: CartListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, listener));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|(existing, _)| *existing != id);
    }

    /// Runs `change` against the current lines. `None` means nothing to do.
    fn commit<F>(&self, change: F) -> Result<(), CartError>
    where
        F: FnOnce(&[CartLineItem]) -> Option<Vec<CartLineItem>>,
    {
        let snapshot = {
            let mut lines = self.lines.lock();
            let Some(next) = change(&lines) else {
                return Ok(());
            };

            if let Err(err) = self.storage.save(&next) {
                self.logger
                    .error(&format!("Failed to persist cart: {}", err));
                return Err(CartError::Storage(err));
            }

            *lines = next;
            CartSnapshot::from_lines(&lines)
        };

        self.notify(&snapshot);
        Ok(())
    }

    fn notify(&self, snapshot: &CartSnapshot) {
        let listeners: Vec<CartListener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}
