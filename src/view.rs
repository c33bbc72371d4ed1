//! Derived views over the catalog and the session selection.
//!
//! Nothing here is stored: every sequence and count is recomputed from the
//! catalog and the store on each call.

use crate::catalog::{Catalog, Product, ProductId};
use crate::store::SelectionStore;

/// The two product listings a shopper can browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Favorites,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::All, Tab::Favorites];

    pub fn title(self) -> &'static str {
        match self {
            Tab::All => "All Products",
            Tab::Favorites => "Favorites",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::All => Tab::Favorites,
            Tab::Favorites => Tab::All,
        }
    }
}

/// Counts shown next to the cart button and the tab titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Badges {
    pub all_products: usize,
    pub favorites: usize,
    pub cart: usize,
}

impl Badges {
    pub fn for_tab(&self, tab: Tab) -> usize {
        match tab {
            Tab::All => self.all_products,
            Tab::Favorites => self.favorites,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ViewComposer<'a> {
    catalog: &'a Catalog,
    store: &'a SelectionStore,
}

impl<'a> ViewComposer<'a> {
    pub fn new(catalog: &'a Catalog, store: &'a SelectionStore) -> Self {
        Self { catalog, store }
    }

    /// The catalog verbatim, in catalog order.
    pub fn all_products(&self) -> &'a [Product] {
        self.catalog.products()
    }

    /// Favorited products in catalog order, not in the order they were
    /// favorited.
    pub fn favorite_products(&self) -> Vec<&'a Product> {
        let store = self.store;
        self.catalog
            .iter()
            .filter(|product| store.is_favorite(product.id))
            .collect()
    }

    pub fn products_for(&self, tab: Tab) -> Vec<&'a Product> {
        match tab {
            Tab::All => self.all_products().iter().collect(),
            Tab::Favorites => self.favorite_products(),
        }
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.store.is_favorite(id)
    }

    pub fn favorite_count(&self) -> usize {
        self.store.favorite_count()
    }

    pub fn cart_count(&self) -> usize {
        self.store.cart_count()
    }

    pub fn badges(&self) -> Badges {
        Badges {
            all_products: self.catalog.len(),
            favorites: self.favorite_count(),
            cart: self.cart_count(),
        }
    }
}
