//! Session selection store.
//!
//! Tracks which products are favorited and which have been added to the
//! cart. The store is owned by a single session and starts empty.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Favorites list and cart multiset
//! - `intent.rs` - Store commands (ToggleFavorite, AddToCart)
//! - `reducer.rs` - State transitions (pure, no catalog access)
//!
//! `SelectionStore` wraps the reducer and rejects ids the catalog does not
//! know, so every id it holds references a catalog product.

mod error;
mod intent;
mod reducer;
mod state;

pub use error::StoreError;
pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::SelectionState;

use std::collections::HashSet;

use crate::catalog::{Catalog, ProductId};
use crate::mvi::{dispatch_mvi, Reducer};

pub struct SelectionStore {
    known: HashSet<ProductId>,
    state: SelectionState,
}

impl SelectionStore {
    /// Create an empty store accepting the ids of `catalog`.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            known: catalog.ids().collect(),
            state: SelectionState::default(),
        }
    }

    /// Flip favorite membership of `id`. Returns the new membership.
    pub fn toggle_favorite(&mut self, id: ProductId) -> Result<bool, StoreError> {
        self.ensure_known(id)?;
        self.dispatch(SelectionIntent::ToggleFavorite { id });
        let favorite = self.state.is_favorite(id);
        tracing::debug!(product = %id, favorite, "Toggled favorite");
        Ok(favorite)
    }

    /// Append one unit of `id` to the cart. Returns the new cart count.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<usize, StoreError> {
        self.ensure_known(id)?;
        self.dispatch(SelectionIntent::AddToCart { id });
        let count = self.cart_count();
        tracing::debug!(product = %id, cart_count = count, "Added to cart");
        Ok(count)
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.state.is_favorite(id)
    }

    /// Number of cart entries, duplicates counted.
    pub fn cart_count(&self) -> usize {
        self.state.cart.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.state.favorites.len()
    }

    /// Favorited ids in the order they were added.
    pub fn favorites(&self) -> &[ProductId] {
        &self.state.favorites
    }

    pub fn cart(&self) -> &[ProductId] {
        &self.state.cart
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    fn ensure_known(&self, id: ProductId) -> Result<(), StoreError> {
        if self.known.contains(&id) {
            return Ok(());
        }
        tracing::warn!(product = %id, "Rejected selection of unknown product");
        Err(StoreError::UnknownProduct(id))
    }

    fn dispatch(&mut self, intent: SelectionIntent) {
        dispatch_mvi!(self, state, SelectionReducer, intent);
    }
}
