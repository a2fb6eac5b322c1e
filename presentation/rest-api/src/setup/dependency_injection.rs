use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::file::FileCartStorage;
use persistence::cart::in_memory::InMemoryCartStorage;
use persistence::catalog::cache::CachedCatalogRepository;
use persistence::catalog::in_memory::InMemoryCatalogRepository;
use persistence::catalog::repository::PostgresCatalogRepository;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::checkout::CheckoutUseCaseImpl;
use business::application::item::create::GenerateLabelUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::get_page::GetItemsPageUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::qr_payload::resolve::ResolvePayloadUseCaseImpl;
use business::domain::cart::checkout::CheckoutLinkBuilder;
use business::domain::cart::model::CartSnapshot;
use business::domain::cart::storage::{CART_SLOT, CartStorage};
use business::domain::cart::store::CartStore;
use business::domain::item::repository::CatalogRepository;
use business::domain::logger::Logger;
use business::domain::qr_payload::codec::QrPayloadCodec;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub item_api: crate::api::item::routes::ItemApi,
    pub scan_api: crate::api::scan::routes::ScanApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig, pool: Option<sqlx::PgPool>) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let (catalog, backend): (Arc<dyn CatalogRepository>, &'static str) = match pool {
            Some(pool) => (Arc::new(PostgresCatalogRepository::new(pool)), "postgres"),
            None => {
                tracing::warn!("DATABASE_URL not set, keeping the catalog in memory");
                (Arc::new(InMemoryCatalogRepository::new()), "memory")
            }
        };
        let repository: Arc<dyn CatalogRepository> =
            Arc::new(CachedCatalogRepository::new(catalog, config.catalog.cache_ttl));

        let cart_storage: Arc<dyn CartStorage> = match &config.cart.storage_dir {
            Some(dir) => Arc::new(FileCartStorage::new(dir, CART_SLOT)),
            None => Arc::new(InMemoryCartStorage::new()),
        };
        let cart = Arc::new(CartStore::restore(cart_storage, logger.clone()));
        cart.subscribe(Arc::new(|snapshot: &CartSnapshot| {
            tracing::debug!(
                "Cart changed: {} units, total {}",
                snapshot.item_count,
                snapshot.total
            );
        }));

        let codec = QrPayloadCodec::new(config.label.public_origin.clone())?;
        let links = CheckoutLinkBuilder::new(
            config.checkout.base_url.clone(),
            config.checkout.associate_tag.clone(),
        )?;

        // Item use cases
        let generate_label_use_case = Arc::new(GenerateLabelUseCaseImpl {
            repository: repository.clone(),
            codec: codec.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllItemsUseCaseImpl {
            repository: repository.clone(),
            codec: codec.clone(),
            logger: logger.clone(),
        });
        let get_page_use_case = Arc::new(GetItemsPageUseCaseImpl {
            repository: repository.clone(),
            codec: codec.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: repository.clone(),
            codec: codec.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: repository.clone(),
            codec: codec.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });

        // Scan use cases
        let resolve_use_case = Arc::new(ResolvePayloadUseCaseImpl {
            repository: repository.clone(),
            codec,
            logger: logger.clone(),
        });

        // Cart use cases
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            repository,
            cart: cart.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            cart: cart.clone(),
            links,
            logger,
        });

        let health_api = crate::api::health::routes::Api::new(backend);
        let item_api = crate::api::item::routes::ItemApi::new(
            generate_label_use_case,
            get_all_use_case,
            get_page_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );
        let scan_api = crate::api::scan::routes::ScanApi::new(resolve_use_case);
        let cart_api =
            crate::api::cart::routes::CartApi::new(cart, add_to_cart_use_case, checkout_use_case);

        Ok(Self {
            health_api,
            item_api,
            scan_api,
            cart_api,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        cart_config::CartConfig, catalog_config::CatalogConfig, checkout_config::CheckoutConfig,
        label_config::LabelConfig, server_config::ServerConfig,
    };
    use business::domain::cart::checkout::DEFAULT_CHECKOUT_BASE_URL;
    use persistence::catalog::cache::DEFAULT_CACHE_TTL;
    use poem::middleware::Cors;
    use url::Url;

    fn config(storage_dir: Option<std::path::PathBuf>, origin: &str) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                ip: "127.0.0.1".to_string(),
                port: "0".to_string(),
            },
            cors: Cors::new(),
            catalog: CatalogConfig {
                cache_ttl: DEFAULT_CACHE_TTL,
            },
            label: LabelConfig {
                public_origin: Some(Url::parse(origin).unwrap()),
            },
            cart: CartConfig { storage_dir },
            checkout: CheckoutConfig {
                base_url: Url::parse(DEFAULT_CHECKOUT_BASE_URL).unwrap(),
                associate_tag: None,
            },
        }
    }

    #[test]
    fn should_wire_in_memory_catalog_without_database() {
        let dir = tempfile::tempdir().unwrap();

        let config = config(Some(dir.path().to_path_buf()), "http://localhost:5173");

        let container = DependencyContainer::new(&config, None);

        assert!(container.is_ok());
    }

    #[test]
    fn should_reject_origin_that_cannot_hold_a_path() {
        let container = DependencyContainer::new(&config(None, "mailto:labels@example.com"), None);

        assert!(container.is_err());
    }
}
