use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;

use business::domain::errors::RepositoryError;
use business::domain::item::model::{ItemPatch, ItemRecord, NewItem};
use business::domain::item::repository::{CatalogRepository, ItemPage, PageCursor};
use business::domain::shared::value_objects::ItemId;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct CachedListing {
    records: Vec<ItemRecord>,
    stored_at: Instant,
}

#[derive(Default)]
struct CacheState {
    listing: Option<CachedListing>,
    /// Bumped on every invalidation so a read that raced a write is not stored.
    generation: u64,
}

/// Read-through cache for the full catalog listing.
///
/// Any write drops everything that is cached, whether or not the write succeeded.
pub struct CachedCatalogRepository {
    inner: Arc<dyn CatalogRepository>,
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl CachedCatalogRepository {
    pub fn new(inner: Arc<dyn CatalogRepository>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn invalidate(&self) {
        let mut state = self.state.lock();
        state.listing = None;
        state.generation += 1;
    }

    fn fresh_listing(&self) -> Result<Vec<ItemRecord>, u64> {
        let state = self.state.lock();
        match &state.listing {
            Some(cached) if cached.stored_at.elapsed() < self.ttl => Ok(cached.records.clone()),
            _ => Err(state.generation),
        }
    }
}

#[async_trait]
impl CatalogRepository for CachedCatalogRepository {
    async fn create(&self, item: &NewItem) -> Result<ItemId, RepositoryError> {
        let result = self.inner.create(item).await;
        self.invalidate();
        result
    }

    async fn get_all(&self) -> Result<Vec<ItemRecord>, RepositoryError> {
        let generation = match self.fresh_listing() {
            Ok(records) => {
                tracing::debug!("Serving {} items from cache", records.len());
                return Ok(records);
            }
            Err(generation) => generation,
        };

        let records = self.inner.get_all().await?;

        let mut state = self.state.lock();
        if state.generation == generation {
            state.listing = Some(CachedListing {
                records: records.clone(),
                stored_at: Instant::now(),
            });
        }
        Ok(records)
    }

    async fn get_by_id(&self, id: &ItemId) -> Result<ItemRecord, RepositoryError> {
        self.inner.get_by_id(id).await
    }

    async fn get_page(
        &self,
        page_size: u32,
        cursor: Option<PageCursor>,
    ) -> Result<ItemPage, RepositoryError> {
        self.inner.get_page(page_size, cursor).await
    }

    async fn update(&self, id: &ItemId, patch: ItemPatch) -> Result<(), RepositoryError> {
        let result = self.inner.update(id, patch).await;
        self.invalidate();
        result
    }

    async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError> {
        let result = self.inner.delete(id).await;
        self.invalidate();
        result
    }
}
