use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::{CatalogRepository, ItemPage};
use crate::domain::item::use_cases::get_page::{
    GetItemsPageParams, GetItemsPageUseCase, MAX_PAGE_SIZE,
};
use crate::domain::logger::Logger;
use crate::domain::qr_payload::codec::QrPayloadCodec;

pub struct GetItemsPageUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub codec: QrPayloadCodec,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemsPageUseCase for GetItemsPageUseCaseImpl {
    async fn execute(&self, params: GetItemsPageParams) -> Result<ItemPage, ItemError> {
        if params.page_size == 0 || params.page_size > MAX_PAGE_SIZE {
            return Err(ItemError::InvalidPageSize);
        }

        self.logger.debug(&format!(
            "Fetching page of {} items (cursor: {})",
            params.page_size,
            params.cursor.is_some()
        ));

        let page = self
            .repository
            .get_page(params.page_size, params.cursor)
            .await?;

        let records = page
            .records
            .into_iter()
            .map(|item| self.codec.with_payload(item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ItemPage {
            records,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        })
    }
}
