use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::item::model::ItemRecord;
use business::domain::item::repository::ItemPage;

#[derive(Debug, Clone, Object)]
pub struct GenerateLabelRequest {
    /// Item name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Stock count at creation time
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Marketplace product URL or 10 character product code
    #[oai(skip_serializing_if_is_none)]
    pub marketplace_ref: Option<String>,
    /// Unit price, at most two decimals
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub marketplace_ref: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub marketplace_ref: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    /// Encoded label payload, ready to be rendered as a QR code
    #[oai(skip_serializing_if_is_none)]
    pub qr_code: Option<String>,
}

impl From<ItemRecord> for ItemResponse {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id.as_str().to_string(),
            name: record.name,
            description: record.description,
            quantity: record.quantity,
            category: record.category,
            marketplace_ref: record.marketplace_ref,
            price: record.price.as_f64(),
            created_at: record.created_at,
            qr_code: record.qr_code,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ItemPageResponse {
    pub items: Vec<ItemResponse>,
    /// Pass back as `cursor` to fetch the next page
    #[oai(skip_serializing_if_is_none)]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl From<ItemPage> for ItemPageResponse {
    fn from(page: ItemPage) -> Self {
        Self {
            items: page.records.into_iter().map(Into::into).collect(),
            next_cursor: page.next_cursor.map(|c| c.as_str().to_string()),
            has_more: page.has_more,
        }
    }
}
