use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::qr_payload::codec::QrPayloadCodec;
use crate::domain::qr_payload::errors::ResolvePayloadError;
use crate::domain::qr_payload::use_cases::resolve::{
    ResolvePayloadParams, ResolvePayloadUseCase, ResolvedPayload,
};

pub struct ResolvePayloadUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub codec: QrPayloadCodec,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolvePayloadUseCase for ResolvePayloadUseCaseImpl {
    async fn execute(
        &self,
        params: ResolvePayloadParams,
    ) -> Result<ResolvedPayload, ResolvePayloadError> {
        let payload = self.codec.decode(&params.payload).map_err(|err| {
            self.logger
                .warn(&format!("Rejected scanned payload: {}", err));
            err
        })?;

        self.logger
            .info(&format!("Resolving scanned item: {}", payload.id));

        let item = self
            .repository
            .get_by_id(&payload.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ResolvePayloadError::NotFound,
                other => ResolvePayloadError::Repository(other),
            })?;

        Ok(ResolvedPayload { payload, item })
    }
}
