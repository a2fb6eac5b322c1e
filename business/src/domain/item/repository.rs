use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ItemId;

use super::model::{ItemPatch, ItemRecord, NewItem};

/// Opaque position in a newest-first listing. Only the adapter that issued it
/// knows how to read it; callers hand it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct ItemPage {
    pub records: Vec<ItemRecord>,
    /// Set only when `has_more` is true.
    pub next_cursor: Option<PageCursor>,
    pub has_more: bool,
}

/// Catalog Access: keyed collection of item records.
///
/// Listings are ordered newest-first by `created_at`. `create` is not idempotent;
/// calling it twice stores two records.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn create(&self, item: &NewItem) -> Result<ItemId, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<ItemRecord>, RepositoryError>;
    async fn get_by_id(&self, id: &ItemId) -> Result<ItemRecord, RepositoryError>;
    async fn get_page(
        &self,
        page_size: u32,
        cursor: Option<PageCursor>,
    ) -> Result<ItemPage, RepositoryError>;
    async fn update(&self, id: &ItemId, patch: ItemPatch) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError>;
}
