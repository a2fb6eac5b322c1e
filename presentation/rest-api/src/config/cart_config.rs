use std::env;
use std::path::PathBuf;

/// Where the cart slot is kept between restarts
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// `None` keeps the cart in memory only.
    pub storage_dir: Option<PathBuf>,
}

impl CartConfig {
    /// Environment variables:
    /// - CART_STORAGE_DIR: Directory holding the `cart_items` slot (default: "data").
    ///   An empty value disables durable storage.
    pub fn from_env() -> Self {
        let storage_dir = match env::var("CART_STORAGE_DIR") {
            Ok(dir) if dir.trim().is_empty() => None,
            Ok(dir) => Some(PathBuf::from(dir)),
            Err(_) => Some(PathBuf::from("data")),
        };

        Self { storage_dir }
    }
}
