use chrono::{DateTime, SubsecRound, Utc};

use super::errors::ItemError;
use crate::domain::shared::value_objects::{ItemId, Price};

/// An inventory entry that has been stored by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    /// Inventory count at creation time. Unrelated to cart quantities.
    pub quantity: Option<u32>,
    pub category: Option<String>,
    /// Marketplace product URL or product code, used by checkout handoff.
    pub marketplace_ref: Option<String>,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    /// Previously encoded label payload.
    pub qr_code: Option<String>,
}

pub struct NewItemProps {
    pub name: String,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub marketplace_ref: Option<String>,
    pub price: Price,
}

/// A validated item that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub marketplace_ref: Option<String>,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub qr_code: Option<String>,
}

impl NewItem {
    pub fn new(props: NewItemProps) -> Result<Self, ItemError> {
        if props.name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }

        Ok(Self {
            name: props.name,
            description: non_blank(props.description),
            quantity: props.quantity,
            category: non_blank(props.category),
            marketplace_ref: non_blank(props.marketplace_ref),
            price: props.price,
            // Stored timestamps keep microseconds.
            created_at: Utc::now().trunc_subsecs(6),
            qr_code: None,
        })
    }

    /// Binds the id handed out by the catalog.
    pub fn into_record(self, id: ItemId) -> ItemRecord {
        ItemRecord {
            id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            category: self.category,
            marketplace_ref: self.marketplace_ref,
            price: self.price,
            created_at: self.created_at,
            qr_code: self.qr_code,
        }
    }
}

/// Partial update. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub marketplace_ref: Option<String>,
    pub price: Option<Price>,
    pub qr_code: Option<String>,
}

impl ItemPatch {
    pub fn qr_code(payload: impl Into<String>) -> Self {
        Self {
            qr_code: Some(payload.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ItemRecord {
    /// Applies a patch in place. `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = Some(quantity);
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(marketplace_ref) = patch.marketplace_ref {
            self.marketplace_ref = Some(marketplace_ref);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(qr_code) = patch.qr_code {
            self.qr_code = Some(qr_code);
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str) -> NewItemProps {
        NewItemProps {
            name: name.to_string(),
            description: None,
            quantity: Some(4),
            category: None,
            marketplace_ref: None,
            price: Price::from_cents(1599).unwrap(),
        }
    }

    #[test]
    fn should_create_item_when_name_valid() {
        let result = NewItem::new(props("Hammer"));

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Hammer");
        assert_eq!(item.quantity, Some(4));
        assert!(item.qr_code.is_none());
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = NewItem::new(props(""));

        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = NewItem::new(props("   "));

        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }

    #[test]
    fn should_drop_blank_optional_text() {
        let mut props = props("Level");
        props.description = Some("  ".to_string());
        props.category = Some("Tools".to_string());

        let item = NewItem::new(props).unwrap();

        assert!(item.description.is_none());
        assert_eq!(item.category.as_deref(), Some("Tools"));
    }

    #[test]
    fn should_stamp_creation_time_at_microsecond_precision() {
        let item = NewItem::new(props("Drill")).unwrap();

        assert_eq!(item.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn should_keep_id_and_created_at_when_patched() {
        let new_item = NewItem::new(props("Drill")).unwrap();
        let created_at = new_item.created_at;
        let mut record = new_item.into_record(ItemId::new("42"));

        record.apply(ItemPatch {
            name: Some("Cordless Drill".to_string()),
            price: Some(Price::from_cents(9999).unwrap()),
            ..ItemPatch::default()
        });

        assert_eq!(record.id, ItemId::new("42"));
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.name, "Cordless Drill");
        assert_eq!(record.price.cents(), 9999);
        assert_eq!(record.quantity, Some(4));
    }

    #[test]
    fn should_report_empty_patch() {
        assert!(ItemPatch::default().is_empty());
        assert!(!ItemPatch::qr_code("{}").is_empty());
    }
}
