use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSnapshot;
use crate::domain::shared::value_objects::ItemId;

pub struct AddToCartParams {
    pub id: ItemId,
    pub quantity: u32,
}

/// Detail flow: resolve the record by id, then put it in the cart.
#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<CartSnapshot, CartError>;
}
