use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::errors::QrPayloadError;
use crate::domain::item::model::ItemRecord;
use crate::domain::shared::value_objects::{ItemId, Price};

/// Fields carried inside a label.
///
/// Serialized in declaration order with absent optionals omitted, so the same
/// record always yields the same string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QrPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Loose view of whatever a scanner hands back. Older labels stored price and
/// quantity as strings and some carry only a `url`.
#[derive(Deserialize)]
struct RawPayload {
    url: Option<String>,
    id: Option<String>,
    name: Option<String>,
    price: Option<Value>,
    description: Option<String>,
    quantity: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct QrPayloadCodec {
    origin: Option<Url>,
}

impl QrPayloadCodec {
    /// `origin` is the public base the `/id/<id>` resolution URL is built on.
    pub fn new(origin: Option<Url>) -> Result<Self, QrPayloadError> {
        if origin.as_ref().is_some_and(Url::cannot_be_a_base) {
            return Err(QrPayloadError::InvalidOrigin);
        }
        Ok(Self { origin })
    }

    pub fn resolution_url(&self, id: &ItemId) -> Result<Option<String>, QrPayloadError> {
        let Some(origin) = &self.origin else {
            return Ok(None);
        };

        let mut url = origin.clone();
        url.path_segments_mut()
            .map_err(|_| QrPayloadError::InvalidOrigin)?
            .pop_if_empty()
            .push("id")
            .push(id.as_str());
        Ok(Some(url.to_string()))
    }

    pub fn payload(&self, record: &ItemRecord) -> Result<QrPayload, QrPayloadError> {
        Ok(QrPayload {
            url: self.resolution_url(&record.id)?,
            id: record.id.clone(),
            name: record.name.clone(),
            price: record.price,
            description: record.description.clone(),
            quantity: record.quantity,
        })
    }

    pub fn encode(&self, record: &ItemRecord) -> Result<String, QrPayloadError> {
        let payload = self.payload(record)?;
        serde_json::to_string(&payload).map_err(|_| QrPayloadError::Encoding)
    }

    /// Stored payload when there is one, otherwise a fresh encoding.
    pub fn payload_for(&self, record: &ItemRecord) -> Result<String, QrPayloadError> {
        match record.qr_code.as_deref() {
            Some(stored) if !stored.trim().is_empty() => Ok(stored.to_string()),
            _ => self.encode(record),
        }
    }

    /// Fills `qr_code` with a fresh encoding when nothing is stored.
    pub fn with_payload(&self, mut record: ItemRecord) -> Result<ItemRecord, QrPayloadError> {
        if record.qr_code.as_deref().is_none_or(|s| s.trim().is_empty()) {
            record.qr_code = Some(self.encode(&record)?);
        }
        Ok(record)
    }

    pub fn decode(&self, payload: &str) -> Result<QrPayload, QrPayloadError> {
        let value: Value = serde_json::from_str(payload).map_err(|_| QrPayloadError::Malformed)?;
        // Labels are JSON objects; positional arrays are rejected too.
        if !value.is_object() {
            return Err(QrPayloadError::Malformed);
        }
        let raw: RawPayload =
            serde_json::from_value(value).map_err(|_| QrPayloadError::Malformed)?;

        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(QrPayloadError::MissingField("name"))?;
        let price = decode_price(raw.price.ok_or(QrPayloadError::MissingField("price"))?)?;
        let quantity = raw.quantity.map(decode_quantity).transpose()?.flatten();

        let id = raw
            .id
            .filter(|id| !id.trim().is_empty())
            .or_else(|| raw.url.as_deref().and_then(id_from_url))
            .map(ItemId::from)
            .ok_or(QrPayloadError::MissingField("id"))?;

        Ok(QrPayload {
            url: raw.url,
            id,
            name,
            price,
            description: raw.description.filter(|d| !d.trim().is_empty()),
            quantity,
        })
    }
}

fn decode_price(value: Value) -> Result<Price, QrPayloadError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or(QrPayloadError::InvalidPrice)
            .and_then(|v| Price::from_decimal(v).map_err(|_| QrPayloadError::InvalidPrice)),
        Value::String(s) => Price::parse(&s).map_err(|_| QrPayloadError::InvalidPrice),
        _ => Err(QrPayloadError::InvalidPrice),
    }
}

fn decode_quantity(value: Value) -> Result<Option<u32>, QrPayloadError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .and_then(|q| u32::try_from(q).ok())
            .map(Some)
            .ok_or(QrPayloadError::InvalidQuantity),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| QrPayloadError::InvalidQuantity),
        _ => Err(QrPayloadError::InvalidQuantity),
    }
}

/// `https://host/id/<id>` -> `<id>`
fn id_from_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [.., "id", id] => urlencoding::decode(id).ok().map(|id| id.into_owned()),
        _ => None,
    }
}
