use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::ItemRecord;
use crate::domain::item::repository::CatalogRepository;
use crate::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use crate::domain::logger::Logger;
use crate::domain::qr_payload::codec::QrPayloadCodec;

pub struct GetItemByIdUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub codec: QrPayloadCodec,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemByIdUseCase for GetItemByIdUseCaseImpl {
    async fn execute(&self, params: GetItemByIdParams) -> Result<ItemRecord, ItemError> {
        self.logger
            .info(&format!("Fetching item by id: {}", params.id));

        let item = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        Ok(self.codec.with_payload(item)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::{ItemPatch, ItemRecord, NewItem};
    use crate::domain::item::repository::{ItemPage, PageCursor};
    use crate::domain::shared::value_objects::{ItemId, Price};
    use chrono::Utc;
    use mockall::mock;
    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn create(&self, item: &NewItem) -> Result<ItemId, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<ItemRecord>, RepositoryError>;
            async fn get_by_id(&self, id: &ItemId) -> Result<ItemRecord, RepositoryError>;
            async fn get_page(&self, page_size: u32, cursor: Option<PageCursor>) -> Result<ItemPage, RepositoryError>;
            async fn update(&self, id: &ItemId, patch: ItemPatch) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn record(id: &str, name: &str, cents: i64) -> ItemRecord {
        ItemRecord {
            id: ItemId::new(id),
            name: name.to_string(),
            description: None,
            quantity: None,
            category: None,
            marketplace_ref: None,
            price: Price::from_cents(cents).unwrap(),
            created_at: Utc::now(),
            qr_code: None,
        }
    }


    #[tokio::test]
    async fn should_return_item_when_exists() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| id.as_str() == "42")
            .returning(|_| Ok(record("42", "Drill", 8999)));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            codec: QrPayloadCodec::new(None).unwrap(),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(GetItemByIdParams {
                id: ItemId::new("42"),
            })
            .await
            .unwrap();

        assert_eq!(item.name, "Drill");
        assert!(item.qr_code.is_some());
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_does_not_exist() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            codec: QrPayloadCodec::new(None).unwrap(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetItemByIdParams {
                id: ItemId::new("unknown"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_transport_errors_distinct_from_not_found() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            codec: QrPayloadCodec::new(None).unwrap(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetItemByIdParams {
                id: ItemId::new("42"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
