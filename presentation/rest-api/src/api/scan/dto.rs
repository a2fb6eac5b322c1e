use poem_openapi::Object;

use business::domain::qr_payload::codec::QrPayload;
use business::domain::qr_payload::use_cases::resolve::ResolvedPayload;

use crate::api::item::dto::ItemResponse;

#[derive(Debug, Clone, Object)]
pub struct ScanRequest {
    /// Raw text read from a label
    pub payload: String,
}

/// Fields as they were printed on the label.
#[derive(Debug, Clone, Object)]
pub struct QrPayloadResponse {
    #[oai(skip_serializing_if_is_none)]
    pub url: Option<String>,
    pub id: String,
    pub name: String,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
}

impl From<QrPayload> for QrPayloadResponse {
    fn from(payload: QrPayload) -> Self {
        Self {
            url: payload.url,
            id: payload.id.as_str().to_string(),
            name: payload.name,
            price: payload.price.as_f64(),
            description: payload.description,
            quantity: payload.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ScanResponse {
    pub label: QrPayloadResponse,
    /// Current catalog record the label points at
    pub item: ItemResponse,
}

impl From<ResolvedPayload> for ScanResponse {
    fn from(resolved: ResolvedPayload) -> Self {
        Self {
            label: resolved.payload.into(),
            item: resolved.item.into(),
        }
    }
}
