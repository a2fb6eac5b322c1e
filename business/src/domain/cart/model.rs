use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::item::model::ItemRecord;
use crate::domain::shared::value_objects::{ItemId, Price};

/// An item record plus how many of it are in the cart.
///
/// Serialized with camelCase keys; this is the persisted cart format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, alias = "amazonUrl", skip_serializing_if = "Option::is_none")]
    pub marketplace_ref: Option<String>,
    pub price: Price,
    #[serde(default = "Utc::now", deserialize_with = "created_at_or_now")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    /// Always at least 1.
    pub quantity: u32,
}

/// Browsers write `null` for an invalid `Date`; treat it like a missing stamp.
fn created_at_or_now<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(Utc::now))
}

impl CartLineItem {
    pub fn from_record(record: &ItemRecord, quantity: u32) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            marketplace_ref: record.marketplace_ref.clone(),
            price: record.price,
            created_at: record.created_at,
            qr_code: record.qr_code.clone(),
            quantity,
        }
    }

    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Read-only view handed to callers and subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub total: Price,
    pub item_count: u32,
}

impl CartSnapshot {
    pub fn from_lines(lines: &[CartLineItem]) -> Self {
        Self {
            items: lines.to_vec(),
            total: total_of(lines),
            item_count: lines
                .iter()
                .fold(0u32, |count, line| count.saturating_add(line.quantity)),
        }
    }
}

pub fn total_of(lines: &[CartLineItem]) -> Price {
    lines.iter().map(CartLineItem::subtotal).sum()
}
