use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::item::model::ItemRecord;
use business::domain::item::repository::{ItemPage, PageCursor};

/// Position of the last record handed out, in `(created_at, id)` descending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorKey {
    pub created_at: DateTime<Utc>,
    pub id: String,
}

impl CursorKey {
    pub fn of(record: &ItemRecord) -> Self {
        Self {
            created_at: record.created_at,
            id: record.id.as_str().to_string(),
        }
    }

    pub fn encode(&self) -> Result<PageCursor, RepositoryError> {
        let json = serde_json::to_vec(self).map_err(|_| RepositoryError::Persistence)?;
        Ok(PageCursor::new(URL_SAFE_NO_PAD.encode(json)))
    }

    pub fn decode(cursor: &PageCursor) -> Result<Self, RepositoryError> {
        let json = URL_SAFE_NO_PAD
            .decode(cursor.as_str())
            .map_err(|_| RepositoryError::InvalidCursor)?;
        serde_json::from_slice(&json).map_err(|_| RepositoryError::InvalidCursor)
    }

    /// True when `record` sorts strictly after this key in a newest-first listing.
    pub fn precedes(&self, record: &ItemRecord) -> bool {
        (record.created_at, record.id.as_str()) < (self.created_at, self.id.as_str())
    }
}

/// Turns a `page_size + 1` fetch into a page, using the extra row to detect `has_more`.
pub fn into_page(mut records: Vec<ItemRecord>, page_size: u32) -> Result<ItemPage, RepositoryError> {
    let page_size = page_size as usize;
    let has_more = records.len() > page_size;
    records.truncate(page_size);

    let next_cursor = match records.last() {
        Some(last) if has_more => Some(CursorKey::of(last).encode()?),
        _ => None,
    };

    Ok(ItemPage {
        records,
        next_cursor,
        has_more,
    })
}
