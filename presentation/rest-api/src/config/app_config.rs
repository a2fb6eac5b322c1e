use super::{
    cart_config::CartConfig, catalog_config::CatalogConfig, checkout_config::CheckoutConfig,
    cors_config, label_config::LabelConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
    pub label: LabelConfig,
    pub cart: CartConfig,
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env(),
            label: LabelConfig::from_env()?,
            cart: CartConfig::from_env(),
            checkout: CheckoutConfig::from_env()?,
        })
    }
}
