use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::ItemRecord;
use crate::domain::shared::value_objects::{ItemId, Price};

pub struct UpdateItemParams {
    pub id: ItemId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub marketplace_ref: Option<String>,
    pub price: Option<Price>,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<ItemRecord, ItemError>;
}
