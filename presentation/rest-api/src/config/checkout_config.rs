use std::env;

use anyhow::Context;
use business::domain::cart::checkout::DEFAULT_CHECKOUT_BASE_URL;
use url::Url;

/// Marketplace cart handoff settings
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub base_url: Url,
    pub associate_tag: Option<String>,
}

impl CheckoutConfig {
    /// Environment variables:
    /// - CHECKOUT_BASE_URL: Marketplace add-to-cart endpoint
    ///   (default: "https://www.amazon.com/gp/aws/cart/add.html")
    /// - CHECKOUT_ASSOCIATE_TAG: Affiliate tag appended to the link (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = env::var("CHECKOUT_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CHECKOUT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url).context("CHECKOUT_BASE_URL must be an absolute URL")?;

        Ok(Self {
            base_url,
            associate_tag: env::var("CHECKOUT_ASSOCIATE_TAG").ok(),
        })
    }
}
