use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSnapshot;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::CatalogRepository;
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub cart: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<CartSnapshot, CartError> {
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Adding {} x {} to cart",
            params.quantity, params.id
        ));

        let item = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        self.cart.add_item(&item, params.quantity)?;

        Ok(self.cart.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLineItem;
    use crate::domain::cart::storage::{CartStorage, CartStorageError};
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

    mock! {
        pub Storage {}

        impl CartStorage for Storage {
            fn load(&self) -> Result<Vec<CartLineItem>, CartStorageError>;
            fn save(&self, lines: &[CartLineItem]) -> Result<(), CartStorageError>;
        }
    }

    fn cart() -> Arc<CartStore> {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| Ok(Vec::new()));
        storage.expect_save().returning(|_| Ok(()));
        Arc::new(CartStore::restore(Arc::new(storage), mock_logger()))
    }

    #[tokio::test]
    async fn should_add_resolved_record_to_cart() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(record("a", "Hammer", 1000)));
        let cart = cart();

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            cart: cart.clone(),
            logger: mock_logger(),
        };

        use_case
            .execute(AddToCartParams {
                id: ItemId::new("a"),
                quantity: 2,
            })
            .await
            .unwrap();
        let snapshot = use_case
            .execute(AddToCartParams {
                id: ItemId::new("a"),
                quantity: 1,
            })
            .await
            .unwrap();

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 3);
        assert_eq!(snapshot.total.cents(), 3000);
        assert_eq!(cart.total().cents(), 3000);
    }

    #[tokio::test]
    async fn should_leave_cart_untouched_when_item_unknown() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let cart = cart();

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            cart: cart.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                id: ItemId::new("ghost"),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_without_lookup() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo.expect_get_by_id().never();

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            cart: cart(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                id: ItemId::new("a"),
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
