use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{ItemPatch, ItemRecord, non_blank};
use crate::domain::item::repository::CatalogRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::qr_payload::codec::QrPayloadCodec;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub codec: QrPayloadCodec,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<ItemRecord, ItemError> {
        self.logger.info(&format!("Updating item: {}", params.id));

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        if params.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ItemError::NameEmpty);
        }

        let mut patch = ItemPatch {
            name: params.name,
            description: non_blank(params.description),
            quantity: params.quantity,
            category: non_blank(params.category),
            marketplace_ref: non_blank(params.marketplace_ref),
            price: params.price,
            qr_code: None,
        };
        if patch.is_empty() {
            return Ok(existing);
        }

        let mut updated = existing;
        updated.apply(patch.clone());

        // Name, price and the rest are embedded in the label, so re-encode.
        let payload = self.codec.encode(&updated)?;
        updated.qr_code = Some(payload.clone());
        patch.qr_code = Some(payload);

        self.repository.update(&updated.id, patch).await?;

        self.logger.info(&format!("Item updated: {}", updated.id));
        Ok(updated)
    }
}
