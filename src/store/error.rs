use thiserror::Error;

use crate::catalog::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Product {0} is not in the catalog")]
    UnknownProduct(ProductId),
}
