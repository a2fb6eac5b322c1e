use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::ItemRecord;
use crate::domain::item::repository::CatalogRepository;
use crate::domain::item::use_cases::get_all::GetAllItemsUseCase;
use crate::domain::logger::Logger;
use crate::domain::qr_payload::codec::QrPayloadCodec;

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub codec: QrPayloadCodec,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ItemRecord>, ItemError> {
        self.logger.info("Fetching all items");

        let items = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .map(|item| self.codec.with_payload(item))
            .collect::<Result<Vec<_>, _>>()?;

        self.logger.info(&format!("Found {} items", items.len()));
        Ok(items)
    }
}
