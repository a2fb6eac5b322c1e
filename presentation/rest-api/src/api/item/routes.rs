use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::item::errors::ItemError;
use business::domain::item::repository::PageCursor;
use business::domain::item::use_cases::create::{GenerateLabelParams, GenerateLabelUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::GetAllItemsUseCase;
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::get_page::{
    DEFAULT_PAGE_SIZE, GetItemsPageParams, GetItemsPageUseCase,
};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use business::domain::shared::value_objects::{ItemId, Price};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{
    GenerateLabelRequest, ItemPageResponse, ItemResponse, UpdateItemRequest,
};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    generate_label_use_case: Arc<dyn GenerateLabelUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_page_use_case: Arc<dyn GetItemsPageUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        generate_label_use_case: Arc<dyn GenerateLabelUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_page_use_case: Arc<dyn GetItemsPageUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            generate_label_use_case,
            get_all_use_case,
            get_page_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Inventory labeling API
///
/// Endpoints for creating labeled items and browsing the catalog.
#[OpenApi]
impl ItemApi {
    /// Generate a label
    ///
    /// Stores a new item and returns it with its encoded QR payload. Submitting
    /// the same form twice stores two items.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn generate_label(&self, body: Json<GenerateLabelRequest>) -> GenerateLabelResponse {
        let price = match Price::from_decimal(body.0.price) {
            Ok(price) => price,
            Err(err) => {
                let (_status, json) = ItemError::from(err).into_error_response();
                return GenerateLabelResponse::BadRequest(json);
            }
        };

        let params = GenerateLabelParams {
            name: body.0.name,
            description: body.0.description,
            quantity: body.0.quantity,
            category: body.0.category,
            marketplace_ref: body.0.marketplace_ref,
            price,
        };

        match self.generate_label_use_case.execute(params).await {
            Ok(record) => GenerateLabelResponse::Created(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GenerateLabelResponse::BadRequest(json),
                    _ => GenerateLabelResponse::InternalError(json),
                }
            }
        }
    }

    /// List items page by page
    ///
    /// Returns items newest first. Pass `next_cursor` from the previous page as
    /// `cursor` to continue.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn get_page(
        &self,
        page_size: Query<Option<u32>>,
        cursor: Query<Option<String>>,
    ) -> GetItemsPageResponse {
        let params = GetItemsPageParams {
            page_size: page_size.0.unwrap_or(DEFAULT_PAGE_SIZE),
            cursor: cursor.0.filter(|c| !c.is_empty()).map(PageCursor::new),
        };

        match self.get_page_use_case.execute(params).await {
            Ok(page) => GetItemsPageResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetItemsPageResponse::BadRequest(json),
                    _ => GetItemsPageResponse::InternalError(json),
                }
            }
        }
    }

    /// List all items
    ///
    /// Returns every item newest first. Served from a short-lived cache.
    #[oai(path = "/items/all", method = "get", tag = "ApiTags::Items")]
    async fn get_all(&self) -> GetAllItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(records) => {
                let responses: Vec<ItemResponse> = records.into_iter().map(Into::into).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllItemsResponse::InternalError(json)
            }
        }
    }

    /// Resolve a label link
    ///
    /// Target of the URL embedded in every label.
    #[oai(path = "/id/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_by_id(&self, id: Path<String>) -> GetItemByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetItemByIdParams {
                id: ItemId::new(id.0),
            })
            .await
        {
            Ok(record) => GetItemByIdResponse::Ok(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemByIdResponse::NotFound(json),
                    _ => GetItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    ///
    /// Changes only the given fields and re-encodes the label payload.
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update(&self, id: Path<String>, body: Json<UpdateItemRequest>) -> UpdateItemResponse {
        let price = match body.0.price.map(Price::from_decimal).transpose() {
            Ok(price) => price,
            Err(err) => {
                let (_status, json) = ItemError::from(err).into_error_response();
                return UpdateItemResponse::BadRequest(json);
            }
        };

        let params = UpdateItemParams {
            id: ItemId::new(id.0),
            name: body.0.name,
            description: body.0.description,
            quantity: body.0.quantity,
            category: body.0.category,
            marketplace_ref: body.0.marketplace_ref,
            price,
        };

        match self.update_use_case.execute(params).await {
            Ok(record) => UpdateItemResponse::Ok(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateItemResponse::BadRequest(json),
                    404 => UpdateItemResponse::NotFound(json),
                    _ => UpdateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete(&self, id: Path<String>) -> DeleteItemResponse {
        match self
            .delete_use_case
            .execute(DeleteItemParams {
                id: ItemId::new(id.0),
            })
            .await
        {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateLabelResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemsPageResponse {
    #[oai(status = 200)]
    Ok(Json<ItemPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
