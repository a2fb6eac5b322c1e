use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::checkout::CheckoutLink;
use business::domain::cart::model::{CartLineItem, CartSnapshot};

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Id of a catalog item
    pub id: String,
    /// Units to add (default: 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartQuantityRequest {
    /// New quantity. Values below 1 leave the line unchanged.
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub marketplace_ref: Option<String>,
    pub price: f64,
    pub quantity: u32,
    pub subtotal: f64,
    pub created_at: DateTime<Utc>,
}

impl From<CartLineItem> for CartLineResponse {
    fn from(line: CartLineItem) -> Self {
        Self {
            subtotal: line.subtotal().as_f64(),
            id: line.id.as_str().to_string(),
            name: line.name,
            description: line.description,
            category: line.category,
            marketplace_ref: line.marketplace_ref,
            price: line.price.as_f64(),
            quantity: line.quantity,
            created_at: line.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub total: f64,
    /// Sum of line quantities
    pub item_count: u32,
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        Self {
            items: snapshot.items.into_iter().map(Into::into).collect(),
            total: snapshot.total.as_f64(),
            item_count: snapshot.item_count,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    /// Marketplace cart link to open in a new window
    pub url: String,
    /// Cart lines left out for lacking a usable marketplace reference
    pub skipped: Vec<String>,
}

impl From<CheckoutLink> for CheckoutResponse {
    fn from(link: CheckoutLink) -> Self {
        Self {
            url: link.url,
            skipped: link
                .skipped
                .into_iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }
}
