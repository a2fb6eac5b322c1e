use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::ItemRecord;

#[async_trait]
pub trait GetAllItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ItemRecord>, ItemError>;
}
