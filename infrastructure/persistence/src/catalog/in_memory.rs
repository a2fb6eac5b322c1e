use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::{ItemPatch, ItemRecord, NewItem};
use business::domain::item::repository::{CatalogRepository, ItemPage, PageCursor};
use business::domain::shared::value_objects::ItemId;

use super::cursor::{CursorKey, into_page};

/// Process-local catalog, used when no database is configured.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    records: RwLock<HashMap<ItemId, ItemRecord>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = ItemRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id.clone(), r)).collect()),
        }
    }

    fn newest_first(&self) -> Vec<ItemRecord> {
        let mut records: Vec<ItemRecord> = self.records.read().values().cloned().collect();
        records.sort_by(|a, b| {
            (b.created_at, b.id.as_str()).cmp(&(a.created_at, a.id.as_str()))
        });
        records
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn create(&self, item: &NewItem) -> Result<ItemId, RepositoryError> {
        let id = ItemId::new(Uuid::new_v4().to_string());
        self.records
            .write()
            .insert(id.clone(), item.clone().into_record(id.clone()));

        tracing::debug!("Stored item {} in memory", id);
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<ItemRecord>, RepositoryError> {
        Ok(self.newest_first())
    }

    async fn get_by_id(&self, id: &ItemId) -> Result<ItemRecord, RepositoryError> {
        self.records
            .read()
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_page(
        &self,
        page_size: u32,
        cursor: Option<PageCursor>,
    ) -> Result<ItemPage, RepositoryError> {
        let after = cursor.as_ref().map(CursorKey::decode).transpose()?;

        let records = self
            .newest_first()
            .into_iter()
            .filter(|record| after.as_ref().is_none_or(|key| key.precedes(record)))
            .take(page_size as usize + 1)
            .collect();

        into_page(records, page_size)
    }

    async fn update(&self, id: &ItemId, patch: ItemPatch) -> Result<(), RepositoryError> {
        let mut records = self.records.write();
        let record = records.get_mut(id).ok_or(RepositoryError::NotFound)?;
        record.apply(patch);
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError> {
        self.records.write().remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::item::model::NewItemProps;
    use business::domain::shared::value_objects::Price;
    use chrono::{Duration, TimeZone, Utc};

    fn record(id: &str, minutes: i64) -> ItemRecord {
        ItemRecord {
            id: ItemId::new(id),
            name: format!("Item {}", id),
            description: None,
            quantity: None,
            category: None,
            marketplace_ref: None,
            price: Price::from_cents(500).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
                + Duration::minutes(minutes),
            qr_code: None,
        }
    }

    fn new_item(name: &str) -> NewItem {
        NewItem::new(NewItemProps {
            name: name.to_string(),
            description: Some("Cordless".to_string()),
            quantity: Some(3),
            category: None,
            marketplace_ref: None,
            price: Price::from_cents(8999).unwrap(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_assign_distinct_ids_on_repeated_create() {
        let repo = InMemoryCatalogRepository::new();

        let first = repo.create(&new_item("Drill")).await.unwrap();
        let second = repo.create(&new_item("Drill")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
        assert_eq!(repo.get_by_id(&first).await.unwrap().name, "Drill");
    }

    #[tokio::test]
    async fn should_list_newest_first() {
        let repo =
            InMemoryCatalogRepository::with_records(vec![record("a", 1), record("c", 3), record("b", 2)]);

        let ids: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id.as_str().to_string())
            .collect();

        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn should_thread_cursor_through_pages() {
        let repo = InMemoryCatalogRepository::with_records((1..=5).map(|n| record(&n.to_string(), n)));

        let first = repo.get_page(2, None).await.unwrap();
        assert!(first.has_more);
        assert_eq!(first.records[0].id, ItemId::new("5"));

        let second = repo.get_page(2, first.next_cursor).await.unwrap();
        assert!(second.has_more);
        assert_eq!(second.records[0].id, ItemId::new("3"));

        let third = repo.get_page(2, second.next_cursor).await.unwrap();
        assert!(!third.has_more);
        assert!(third.next_cursor.is_none());
        assert_eq!(third.records.len(), 1);
        assert_eq!(third.records[0].id, ItemId::new("1"));
    }

    #[tokio::test]
    async fn should_report_no_more_when_page_is_exactly_full() {
        let repo = InMemoryCatalogRepository::with_records(vec![record("a", 1), record("b", 2)]);

        let page = repo.get_page(2, None).await.unwrap();

        assert_eq!(page.records.len(), 2);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn should_reject_unknown_cursor() {
        let repo = InMemoryCatalogRepository::new();

        let result = repo.get_page(2, Some(PageCursor::new("garbage!"))).await;

        assert!(matches!(result, Err(RepositoryError::InvalidCursor)));
    }

    #[tokio::test]
    async fn should_patch_only_given_fields() {
        let repo = InMemoryCatalogRepository::with_records(vec![record("a", 1)]);
        let before = repo.get_by_id(&ItemId::new("a")).await.unwrap();

        repo.update(&ItemId::new("a"), ItemPatch::qr_code("{}"))
            .await
            .unwrap();

        let after = repo.get_by_id(&ItemId::new("a")).await.unwrap();
        assert_eq!(after.qr_code.as_deref(), Some("{}"));
        assert_eq!(after.name, before.name);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn should_fail_update_of_unknown_item() {
        let repo = InMemoryCatalogRepository::new();

        let result = repo.update(&ItemId::new("x"), ItemPatch::qr_code("{}")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_delete_record() {
        let repo = InMemoryCatalogRepository::with_records(vec![record("a", 1)]);

        repo.delete(&ItemId::new("a")).await.unwrap();

        assert!(matches!(
            repo.get_by_id(&ItemId::new("a")).await,
            Err(RepositoryError::NotFound)
        ));
    }
}
