use crate::catalog::ProductId;
use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionIntent {
    /// Add the id to favorites, or remove it when already present.
    ToggleFavorite { id: ProductId },
    /// Append one unit of the id to the cart.
    AddToCart { id: ProductId },
}

impl Intent for SelectionIntent {}
