use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{ItemPatch, ItemRecord, NewItem, NewItemProps};
use crate::domain::item::repository::CatalogRepository;
use crate::domain::item::use_cases::create::{GenerateLabelParams, GenerateLabelUseCase};
use crate::domain::logger::Logger;
use crate::domain::qr_payload::codec::QrPayloadCodec;

pub struct GenerateLabelUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub codec: QrPayloadCodec,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateLabelUseCase for GenerateLabelUseCaseImpl {
    async fn execute(&self, params: GenerateLabelParams) -> Result<ItemRecord, ItemError> {
        self.logger
            .info(&format!("Generating label for item: {}", params.name));

        let new_item = NewItem::new(NewItemProps {
            name: params.name,
            description: params.description,
            quantity: params.quantity,
            category: params.category,
            marketplace_ref: params.marketplace_ref,
            price: params.price,
        })?;

        let id = self.repository.create(&new_item).await?;
        let mut record = new_item.into_record(id);

        // The payload embeds the id, so it can only be encoded now.
        let payload = self.codec.encode(&record)?;
        self.repository
            .update(&record.id, ItemPatch::qr_code(payload.clone()))
            .await?;
        record.qr_code = Some(payload);

        self.logger
            .info(&format!("Item created with id: {}", record.id));
        Ok(record)
    }
}
