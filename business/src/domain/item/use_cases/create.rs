use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::ItemRecord;
use crate::domain::shared::value_objects::Price;

pub struct GenerateLabelParams {
    pub name: String,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub marketplace_ref: Option<String>,
    pub price: Price,
}

/// Stores a new item and writes back its final label payload.
#[async_trait]
pub trait GenerateLabelUseCase: Send + Sync {
    async fn execute(&self, params: GenerateLabelParams) -> Result<ItemRecord, ItemError>;
}
