use crate::catalog::ProductId;
use crate::mvi::UiState;

/// Session selection: favorites and cart contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Favorited ids, each at most once, in the order they were added.
    pub favorites: Vec<ProductId>,
    /// One entry per add-to-cart action; duplicates represent extra units.
    pub cart: Vec<ProductId>,
}

impl UiState for SelectionState {}

impl SelectionState {
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.cart.is_empty()
    }
}
