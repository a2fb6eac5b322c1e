use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::ItemRecord;
use crate::domain::shared::value_objects::ItemId;

pub struct GetItemByIdParams {
    pub id: ItemId,
}

#[async_trait]
pub trait GetItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetItemByIdParams) -> Result<ItemRecord, ItemError>;
}
