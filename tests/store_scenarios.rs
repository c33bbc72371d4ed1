mod common;

use shopcart::catalog::{Product, ProductId};
use shopcart::store::{SelectionState, StoreError};
use shopcart::view::ViewComposer;

fn ids(products: &[&Product]) -> Vec<u32> {
    products.iter().map(|product| product.id.0).collect()
}

#[test]
fn empty_store_shows_whole_catalog_and_no_selection() {
    let (catalog, store) = common::seeded();
    let composer = ViewComposer::new(&catalog, &store);

    assert_eq!(composer.all_products().len(), 6);
    assert!(composer.favorite_products().is_empty());
    assert_eq!(store.cart_count(), 0);
    assert_eq!(store.favorite_count(), 0);
}

#[test]
fn two_favorites_come_back_in_catalog_order() {
    let (catalog, mut store) = common::seeded();
    store.toggle_favorite(ProductId(3)).unwrap();
    store.toggle_favorite(ProductId(5)).unwrap();

    assert_eq!(store.favorite_count(), 2);
    let composer = ViewComposer::new(&catalog, &store);
    assert_eq!(ids(&composer.favorite_products()), vec![3, 5]);
}

#[test]
fn favorites_ignore_insertion_order() {
    let (catalog, mut store) = common::seeded();
    store.toggle_favorite(ProductId(5)).unwrap();
    store.toggle_favorite(ProductId(3)).unwrap();

    assert_eq!(store.favorites(), &[ProductId(5), ProductId(3)]);
    let composer = ViewComposer::new(&catalog, &store);
    assert_eq!(ids(&composer.favorite_products()), vec![3, 5]);
}

#[test]
fn toggling_twice_unfavorites() {
    let (_catalog, mut store) = common::seeded();
    store.toggle_favorite(ProductId(3)).unwrap();
    store.toggle_favorite(ProductId(3)).unwrap();

    assert_eq!(store.favorite_count(), 0);
    assert!(!store.is_favorite(ProductId(3)));
}

#[test]
fn toggle_pair_is_an_involution_for_every_product() {
    let (catalog, mut store) = common::seeded();
    store.toggle_favorite(ProductId(2)).unwrap();

    for id in catalog.ids() {
        let before = store.is_favorite(id);
        store.toggle_favorite(id).unwrap();
        assert_ne!(store.is_favorite(id), before);
        store.toggle_favorite(id).unwrap();
        assert_eq!(store.is_favorite(id), before);
    }
}

#[test]
fn adding_same_product_three_times_counts_three() {
    let (_catalog, mut store) = common::seeded();
    for _ in 0..3 {
        store.add_to_cart(ProductId(1)).unwrap();
    }
    assert_eq!(store.cart_count(), 3);
}

#[test]
fn cart_count_matches_number_of_adds() {
    let (_catalog, mut store) = common::seeded();
    let adds = [1, 4, 4, 6, 1, 2, 4];
    for (n, id) in adds.iter().enumerate() {
        assert_eq!(store.add_to_cart(ProductId(*id)), Ok(n + 1));
    }
    assert_eq!(store.cart_count(), adds.len());
}

#[test]
fn unknown_product_is_rejected_consistently() {
    let (_catalog, mut store) = common::seeded();
    store.toggle_favorite(ProductId(1)).unwrap();
    store.add_to_cart(ProductId(2)).unwrap();
    let before: SelectionState = store.state().clone();

    for _ in 0..2 {
        assert_eq!(
            store.toggle_favorite(ProductId(999)),
            Err(StoreError::UnknownProduct(ProductId(999)))
        );
    }
    assert_eq!(
        store.add_to_cart(ProductId(999)),
        Err(StoreError::UnknownProduct(ProductId(999)))
    );

    assert_eq!(store.state(), &before);
    assert!(!store.is_favorite(ProductId(999)));
}

#[test]
fn unknown_product_error_names_the_id() {
    let err = StoreError::UnknownProduct(ProductId(999));
    assert_eq!(err.to_string(), "Product 999 is not in the catalog");
}

#[test]
fn favorites_and_cart_are_independent() {
    let (_catalog, mut store) = common::seeded();
    store.add_to_cart(ProductId(4)).unwrap();
    store.toggle_favorite(ProductId(4)).unwrap();
    store.toggle_favorite(ProductId(4)).unwrap();

    assert_eq!(store.cart(), &[ProductId(4)]);
    assert_eq!(store.favorite_count(), 0);
}
