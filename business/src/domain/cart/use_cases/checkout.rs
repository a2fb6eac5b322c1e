use crate::domain::cart::checkout::CheckoutLink;
use crate::domain::cart::errors::CheckoutError;

/// Builds the marketplace handoff for the current cart. Leaves the cart as is.
pub trait CheckoutUseCase: Send + Sync {
    fn execute(&self) -> Result<CheckoutLink, CheckoutError>;
}
