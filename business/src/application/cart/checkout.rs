use std::sync::Arc;

use crate::domain::cart::checkout::{CheckoutLink, CheckoutLinkBuilder};
use crate::domain::cart::errors::CheckoutError;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::checkout::CheckoutUseCase;
use crate::domain::logger::Logger;

pub struct CheckoutUseCaseImpl {
    pub cart: Arc<CartStore>,
    pub links: CheckoutLinkBuilder,
    pub logger: Arc<dyn Logger>,
}

impl CheckoutUseCase for CheckoutUseCaseImpl {
    fn execute(&self) -> Result<CheckoutLink, CheckoutError> {
        let items = self.cart.items();
        self.logger
            .info(&format!("Building checkout link for {} cart lines", items.len()));

        match self.links.build(&items) {
            Ok(link) => {
                if !link.skipped.is_empty() {
                    self.logger.warn(&format!(
                        "Checkout skipped {} lines without a marketplace reference",
                        link.skipped.len()
                    ));
                }
                Ok(link)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Checkout aborted: {}", err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::checkout::DEFAULT_CHECKOUT_BASE_URL;
    use crate::domain::cart::model::CartLineItem;
    use crate::domain::cart::storage::{CartStorage, CartStorageError};
    use crate::domain::item::model::ItemRecord;
    use crate::domain::shared::value_objects::{ItemId, Price};
    use chrono::Utc;
    use mockall::mock;
    use url::Url;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    mock! {
        pub Storage {}

        impl CartStorage for Storage {
            fn load(&self) -> Result<Vec<CartLineItem>, CartStorageError>;
            fn save(&self, lines: &[CartLineItem]) -> Result<(), CartStorageError>;
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

    fn cart_with(items: Vec<(ItemRecord, u32)>) -> Arc<CartStore> {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| Ok(Vec::new()));
        storage.expect_save().returning(|_| Ok(()));
        let cart = CartStore::restore(Arc::new(storage), mock_logger());
        for (item, quantity) in items {
            cart.add_item(&item, quantity).unwrap();
        }
        Arc::new(cart)
    }

    fn record(id: &str, marketplace_ref: Option<&str>) -> ItemRecord {
        ItemRecord {
            id: ItemId::new(id),
            name: format!("Item {}", id),
            description: None,
            quantity: None,
            category: None,
            marketplace_ref: marketplace_ref.map(str::to_string),
            price: Price::from_cents(1999).unwrap(),
            created_at: Utc::now(),
            qr_code: None,
        }
    }

    fn use_case(cart: Arc<CartStore>) -> CheckoutUseCaseImpl {
        CheckoutUseCaseImpl {
            cart,
            links: CheckoutLinkBuilder::new(Url::parse(DEFAULT_CHECKOUT_BASE_URL).unwrap(), None)
                .unwrap(),
            logger: mock_logger(),
        }
    }

    #[test]
    fn should_build_link_from_cart_contents() {
        let cart = cart_with(vec![
            (record("1", Some("B00ABCDE12")), 2),
            (record("2", None), 1),
        ]);

        let link = use_case(cart.clone()).execute().unwrap();

        assert_eq!(
            link.url,
            "https://www.amazon.com/gp/aws/cart/add.html?ASIN.1=B00ABCDE12&Quantity.1=2"
        );
        assert_eq!(link.skipped, vec![ItemId::new("2")]);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn should_abort_when_nothing_qualifies() {
        let cart = cart_with(vec![(record("1", None), 1)]);

        assert_eq!(
            use_case(cart).execute().unwrap_err(),
            CheckoutError::NoEligibleItems
        );
    }
}
