use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::store::CartStore;
use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::checkout::CheckoutUseCase;
use business::domain::shared::value_objects::ItemId;

use crate::api::cart::dto::{
    AddToCartRequest, CartResponse, CheckoutResponse, UpdateCartQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    cart: Arc<CartStore>,
    add_item_use_case: Arc<dyn AddToCartUseCase>,
    checkout_use_case: Arc<dyn CheckoutUseCase>,
}

impl CartApi {
    pub fn new(
        cart: Arc<CartStore>,
        add_item_use_case: Arc<dyn AddToCartUseCase>,
        checkout_use_case: Arc<dyn CheckoutUseCase>,
    ) -> Self {
        Self {
            cart,
            add_item_use_case,
            checkout_use_case,
        }
    }

    fn mutate(&self, result: Result<(), CartError>) -> UpdateCartResponse {
        match result {
            Ok(()) => UpdateCartResponse::Ok(Json(self.cart.snapshot().into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCartResponse::BadRequest(json),
                    _ => UpdateCartResponse::InternalError(json),
                }
            }
        }
    }
}

/// Shopping cart API
///
/// The cart survives restarts when a storage directory is configured.
#[OpenApi]
impl CartApi {
    /// Show the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> Json<CartResponse> {
        Json(self.cart.snapshot().into())
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> UpdateCartResponse {
        self.mutate(self.cart.clear_cart())
    }

    /// Add an item to the cart
    ///
    /// Adding an item already in the cart increases its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddToCartRequest>) -> AddToCartResponse {
        let params = AddToCartParams {
            id: ItemId::new(body.0.id),
            quantity: body.0.quantity.unwrap_or(1),
        };

        match self.add_item_use_case.execute(params).await {
            Ok(snapshot) => AddToCartResponse::Ok(Json(snapshot.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToCartResponse::BadRequest(json),
                    404 => AddToCartResponse::NotFound(json),
                    _ => AddToCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Change a line's quantity
    ///
    /// Quantities below 1 and unknown ids leave the cart unchanged.
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        id: Path<String>,
        body: Json<UpdateCartQuantityRequest>,
    ) -> UpdateCartResponse {
        self.mutate(
            self.cart
                .update_quantity(&ItemId::new(id.0), body.0.quantity),
        )
    }

    /// Remove a line from the cart
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, id: Path<String>) -> UpdateCartResponse {
        self.mutate(self.cart.remove_item(&ItemId::new(id.0)))
    }

    /// Check out on the marketplace
    ///
    /// Builds a marketplace cart link holding every line with a usable product
    /// reference. The local cart is left as is.
    #[oai(path = "/cart/checkout", method = "post", tag = "ApiTags::Cart")]
    async fn checkout(&self) -> CheckoutCartResponse {
        match self.checkout_use_case.execute() {
            Ok(link) => CheckoutCartResponse::Ok(Json(link.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => CheckoutCartResponse::Conflict(json),
                    _ => CheckoutCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutCartResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
