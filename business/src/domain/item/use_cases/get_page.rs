use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::{ItemPage, PageCursor};

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct GetItemsPageParams {
    pub page_size: u32,
    pub cursor: Option<PageCursor>,
}

#[async_trait]
pub trait GetItemsPageUseCase: Send + Sync {
    async fn execute(&self, params: GetItemsPageParams) -> Result<ItemPage, ItemError>;
}
