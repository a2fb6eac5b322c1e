use async_trait::async_trait;

use crate::domain::item::model::ItemRecord;
use crate::domain::qr_payload::codec::QrPayload;
use crate::domain::qr_payload::errors::ResolvePayloadError;

pub struct ResolvePayloadParams {
    pub payload: String,
}

/// What a scanned label points at: the decoded payload and the live record.
#[derive(Debug, Clone)]
pub struct ResolvedPayload {
    pub payload: QrPayload,
    pub item: ItemRecord,
}

#[async_trait]
pub trait ResolvePayloadUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ResolvePayloadParams,
    ) -> Result<ResolvedPayload, ResolvePayloadError>;
}
