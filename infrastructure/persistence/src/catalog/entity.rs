use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::item::model::ItemRecord;
use business::domain::shared::value_objects::{ItemId, Price};

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
    pub marketplace_ref: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub qr_code: Option<String>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Result<ItemRecord, RepositoryError> {
        let cents = (self.price * BigDecimal::from(100))
            .round(0)
            .to_i64()
            .ok_or(RepositoryError::Persistence)?;
        let price = Price::from_cents(cents).map_err(|_| RepositoryError::Persistence)?;

        Ok(ItemRecord {
            id: ItemId::new(self.id),
            name: self.name,
            description: self.description,
            quantity: self.quantity.and_then(|q| u32::try_from(q).ok()),
            category: self.category,
            marketplace_ref: self.marketplace_ref,
            price,
            created_at: self.created_at,
            qr_code: self.qr_code,
        })
    }
}

/// Stores prices as `NUMERIC(12, 2)`.
pub fn price_to_numeric(price: Price) -> BigDecimal {
    BigDecimal::new(price.cents().into(), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entity(price: &str, quantity: Option<i32>) -> ItemEntity {
        ItemEntity {
            id: "42".to_string(),
            name: "Drill".to_string(),
            description: None,
            quantity,
            category: Some("tools".to_string()),
            marketplace_ref: None,
            price: BigDecimal::from_str(price).unwrap(),
            created_at: Utc::now(),
            qr_code: None,
        }
    }

    #[test]
    fn should_map_numeric_price_to_cents() {
        let record = entity("89.99", Some(10)).into_domain().unwrap();

        assert_eq!(record.price.cents(), 8999);
        assert_eq!(record.quantity, Some(10));
        assert_eq!(record.category.as_deref(), Some("tools"));
    }

    #[test]
    fn should_drop_negative_stock_quantity() {
        let record = entity("1.00", Some(-1)).into_domain().unwrap();

        assert_eq!(record.quantity, None);
    }

    #[test]
    fn should_write_price_with_two_decimals() {
        let numeric = price_to_numeric(Price::from_cents(1599).unwrap());

        assert_eq!(numeric, BigDecimal::from_str("15.99").unwrap());
    }
}
